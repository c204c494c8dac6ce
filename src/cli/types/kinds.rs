//! Workout and meal categories.

use crate::error::FitnessError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of workout.
///
/// Stored in the database by its display name (`Cardio`, `Strength`).
///
/// # Examples
///
/// ```rust
/// use fitness_tracker::WorkoutType;
///
/// let kind: WorkoutType = "cardio".parse().unwrap();
/// assert_eq!(kind, WorkoutType::Cardio);
/// assert_eq!(kind.to_string(), "Cardio");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum WorkoutType {
    Cardio,
    Strength,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 2] = [WorkoutType::Cardio, WorkoutType::Strength];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cardio" => Ok(WorkoutType::Cardio),
            "strength" => Ok(WorkoutType::Strength),
            _ => Err(FitnessError::InvalidWorkoutType {
                value: s.to_string(),
            }),
        }
    }
}

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(FitnessError::InvalidMealType {
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! impl_sql_text_enum {
    ($ty:ty) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e: FitnessError| FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

impl_sql_text_enum!(WorkoutType);
impl_sql_text_enum!(MealType);
