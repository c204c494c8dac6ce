//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{MealType, SortOrder, UserId, WorkoutSortKey, WorkoutType};

/// Inclusive date bounds shared by the list commands
#[derive(Debug, Args)]
pub struct DateFilters {
    /// Earliest date to include (YYYY-MM-DD).
    #[clap(long)]
    pub from: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD).
    #[clap(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Parser)]
#[clap(name = "fitness-tracker", about = "Personal fitness tracker")]
pub struct FitnessCli {
    /// Database file (or set `FITNESS_TRACKER_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// User whose records are read and written (or set `FITNESS_TRACKER_USER_ID`).
    #[clap(long, global = true)]
    pub user_id: Option<UserId>,

    /// Log debug output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database tables and the user, if missing
    Init {
        /// Username for the user.
        #[clap(long, default_value = "me")]
        username: String,

        #[clap(long)]
        email: Option<String>,

        /// Free-text goals.
        #[clap(long)]
        goals: Option<String>,

        /// Starting weight in kg.
        #[clap(long)]
        start_weight: Option<f64>,
    },

    /// Show the current user
    User {
        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Log or list workouts
    Workout {
        #[clap(subcommand)]
        cmd: WorkoutCmd,
    },

    /// Log or list meals
    Meal {
        #[clap(subcommand)]
        cmd: MealCmd,
    },

    /// Log or list body measurements
    Progress {
        #[clap(subcommand)]
        cmd: ProgressCmd,
    },

    /// Totals, weekly calorie balance, macros and weight trend
    Dashboard {
        /// Goal weight in kg (or set `FITNESS_TRACKER_GOAL_WEIGHT`).
        #[clap(long)]
        goal_weight: Option<f64>,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkoutCmd {
    /// Log a workout
    Add {
        /// Workout date (defaults to today).
        #[clap(long)]
        date: Option<NaiveDate>,

        #[clap(long = "type", ignore_case = true)]
        workout_type: WorkoutType,

        /// Duration in minutes.
        #[clap(long)]
        duration: u32,

        /// Calories burned.
        #[clap(long)]
        calories: u32,
    },

    /// List workouts with optional filters
    List {
        /// Only this workout type.
        #[clap(long = "type", ignore_case = true)]
        workout_type: Option<WorkoutType>,

        #[clap(flatten)]
        dates: DateFilters,

        /// Sort column.
        #[clap(long, default_value_t = WorkoutSortKey::Date, value_enum)]
        sort: WorkoutSortKey,

        /// Sort direction.
        #[clap(long, default_value_t = SortOrder::Desc, value_enum)]
        order: SortOrder,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum MealCmd {
    /// Log a meal
    Add {
        /// Meal date (defaults to today).
        #[clap(long)]
        date: Option<NaiveDate>,

        #[clap(long = "type", ignore_case = true)]
        meal_type: MealType,

        #[clap(long)]
        calories: u32,

        /// Protein in grams.
        #[clap(long, default_value_t = 0)]
        proteins: u32,

        /// Carbohydrates in grams.
        #[clap(long, default_value_t = 0)]
        carbs: u32,

        /// Fat in grams.
        #[clap(long, default_value_t = 0)]
        fats: u32,
    },

    /// List meals, newest first
    List {
        /// Only this meal type.
        #[clap(long = "type", ignore_case = true)]
        meal_type: Option<MealType>,

        #[clap(flatten)]
        dates: DateFilters,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProgressCmd {
    /// Log a measurement
    Add {
        /// Measurement date (defaults to today).
        #[clap(long)]
        date: Option<NaiveDate>,

        /// Weight in kg.
        #[clap(long)]
        weight: Option<f64>,

        /// Body fat percentage (0-100).
        #[clap(long)]
        body_fat: Option<f64>,

        #[clap(long)]
        notes: Option<String>,
    },

    /// List measurements, oldest first
    List {
        #[clap(flatten)]
        dates: DateFilters,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        FitnessCli::command().debug_assert();
    }

    #[test]
    fn test_parse_workout_list_with_filters() {
        let cli = FitnessCli::parse_from([
            "fitness-tracker",
            "--user-id",
            "42",
            "workout",
            "list",
            "--type",
            "Cardio",
            "--from",
            "2025-01-01",
            "--sort",
            "calories",
            "--order",
            "asc",
        ]);

        assert_eq!(cli.user_id, Some(UserId::new("42")));
        match cli.command {
            Commands::Workout {
                cmd:
                    WorkoutCmd::List {
                        workout_type,
                        dates,
                        sort,
                        order,
                        json,
                    },
            } => {
                assert_eq!(workout_type, Some(WorkoutType::Cardio));
                assert_eq!(dates.from, NaiveDate::from_ymd_opt(2025, 1, 1));
                assert_eq!(dates.to, None);
                assert_eq!(sort, WorkoutSortKey::Calories);
                assert_eq!(order, SortOrder::Asc);
                assert!(!json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_sort_key_is_a_parse_error() {
        let result = FitnessCli::try_parse_from([
            "fitness-tracker",
            "workout",
            "list",
            "--sort",
            "user_id",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_meal_add_defaults_macros_to_zero() {
        let cli = FitnessCli::parse_from([
            "fitness-tracker",
            "meal",
            "add",
            "--type",
            "snack",
            "--calories",
            "200",
        ]);

        match cli.command {
            Commands::Meal {
                cmd:
                    MealCmd::Add {
                        meal_type,
                        calories,
                        proteins,
                        carbs,
                        fats,
                        date,
                    },
            } => {
                assert_eq!(meal_type, MealType::Snack);
                assert_eq!(calories, 200);
                assert_eq!((proteins, carbs, fats), (0, 0, 0));
                assert_eq!(date, None);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
