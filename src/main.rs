//! Entry point: parse CLI, set up logging, open the database and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fitness_tracker::{
    cli::{Commands, DateFilters, FitnessCli, MealCmd, ProgressCmd, WorkoutCmd},
    commands::{
        dashboard::handle_dashboard,
        meals::{handle_add_meal, handle_list_meals, AddMealParams},
        progress::{handle_add_progress, handle_list_progress, AddProgressParams},
        resolve_goal_weight, resolve_user_id, today,
        users::{handle_init, handle_show_user, InitParams},
        workouts::{handle_add_workout, handle_list_workouts, AddWorkoutParams},
        CommandContext,
    },
    storage::{FitnessDatabase, MealQuery, WorkoutQuery},
    DateRange, WorkoutSort,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "fitness_tracker=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn date_range(dates: DateFilters) -> fitness_tracker::Result<DateRange> {
    DateRange::new(dates.from, dates.to)
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = FitnessCli::parse();
    init_logging(app.verbose);

    let db = match app.db {
        Some(path) => FitnessDatabase::open(&path)
            .with_context(|| format!("opening database at {}", path.display()))?,
        None => FitnessDatabase::new().context("opening default database")?,
    };
    let mut ctx = CommandContext::new(db, resolve_user_id(app.user_id));
    tracing::debug!(user_id = %ctx.user_id, "dispatching command");

    match app.command {
        Commands::Init {
            username,
            email,
            goals,
            start_weight,
        } => {
            handle_init(
                &mut ctx,
                InitParams {
                    username,
                    email,
                    goals,
                    start_weight,
                },
            )?;
        }

        Commands::User { json } => handle_show_user(&ctx, json)?,

        Commands::Workout { cmd } => match cmd {
            WorkoutCmd::Add {
                date,
                workout_type,
                duration,
                calories,
            } => {
                handle_add_workout(
                    &mut ctx,
                    AddWorkoutParams {
                        date: date.unwrap_or_else(today),
                        workout_type,
                        duration_minutes: duration,
                        calories_burned: calories,
                    },
                )?;
            }
            WorkoutCmd::List {
                workout_type,
                dates,
                sort,
                order,
                json,
            } => {
                let query = WorkoutQuery {
                    workout_type,
                    range: date_range(dates)?,
                    sort: WorkoutSort::new(sort, order),
                };
                handle_list_workouts(&ctx, query, json)?
            }
        },

        Commands::Meal { cmd } => match cmd {
            MealCmd::Add {
                date,
                meal_type,
                calories,
                proteins,
                carbs,
                fats,
            } => {
                handle_add_meal(
                    &mut ctx,
                    AddMealParams {
                        date: date.unwrap_or_else(today),
                        meal_type,
                        calories,
                        proteins,
                        carbs,
                        fats,
                    },
                )?;
            }
            MealCmd::List {
                meal_type,
                dates,
                json,
            } => {
                let query = MealQuery {
                    meal_type,
                    range: date_range(dates)?,
                };
                handle_list_meals(&ctx, query, json)?
            }
        },

        Commands::Progress { cmd } => match cmd {
            ProgressCmd::Add {
                date,
                weight,
                body_fat,
                notes,
            } => {
                handle_add_progress(
                    &mut ctx,
                    AddProgressParams {
                        date: date.unwrap_or_else(today),
                        weight,
                        body_fat,
                        notes,
                    },
                )?;
            }
            ProgressCmd::List { dates, json } => {
                handle_list_progress(&ctx, date_range(dates)?, json)?
            }
        },

        Commands::Dashboard { goal_weight, json } => {
            handle_dashboard(&ctx, resolve_goal_weight(goal_weight), today(), json)?
        }
    }

    Ok(())
}
