//! Sort keys and directions for record listings.
//!
//! Sort keys are a closed set mapped to fixed column names, so nothing a
//! caller types is ever interpolated into SQL.

use crate::error::FitnessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column a workout listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum WorkoutSortKey {
    #[default]
    Date,
    Calories,
    Duration,
}

impl WorkoutSortKey {
    /// Column name in the `workouts` table.
    pub fn column(&self) -> &'static str {
        match self {
            WorkoutSortKey::Date => "workout_date",
            WorkoutSortKey::Calories => "calories_burned",
            WorkoutSortKey::Duration => "duration_minutes",
        }
    }
}

impl fmt::Display for WorkoutSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkoutSortKey::Date => "date",
            WorkoutSortKey::Calories => "calories",
            WorkoutSortKey::Duration => "duration",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for WorkoutSortKey {
    type Err = FitnessError;

    /// Accepts the short key or the column name itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "workout_date" => Ok(WorkoutSortKey::Date),
            "calories" | "calories_burned" => Ok(WorkoutSortKey::Calories),
            "duration" | "duration_minutes" => Ok(WorkoutSortKey::Duration),
            _ => Err(FitnessError::InvalidSortKey { key: s.to_string() }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

impl FromStr for SortOrder {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(FitnessError::InvalidSortOrder {
                order: s.to_string(),
            }),
        }
    }
}

/// Sort key and direction for workout listings. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutSort {
    pub key: WorkoutSortKey,
    pub order: SortOrder,
}

impl WorkoutSort {
    pub fn new(key: WorkoutSortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_accepts_short_and_column_names() {
        assert_eq!("date".parse::<WorkoutSortKey>().unwrap(), WorkoutSortKey::Date);
        assert_eq!(
            "calories_burned".parse::<WorkoutSortKey>().unwrap(),
            WorkoutSortKey::Calories
        );
        assert_eq!(
            "Duration".parse::<WorkoutSortKey>().unwrap(),
            WorkoutSortKey::Duration
        );
    }

    #[test]
    fn test_sort_key_rejects_anything_else() {
        for input in ["user_id", "workout_date; DROP TABLE workouts", "", "1"] {
            match input.parse::<WorkoutSortKey>() {
                Err(FitnessError::InvalidSortKey { key }) => assert_eq!(key, input),
                other => panic!("Expected InvalidSortKey for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_sort_key_columns() {
        assert_eq!(WorkoutSortKey::Date.column(), "workout_date");
        assert_eq!(WorkoutSortKey::Calories.column(), "calories_burned");
        assert_eq!(WorkoutSortKey::Duration.column(), "duration_minutes");
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("descending".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!(matches!(
            "sideways".parse::<SortOrder>(),
            Err(FitnessError::InvalidSortOrder { .. })
        ));
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let sort = WorkoutSort::default();
        assert_eq!(sort.key, WorkoutSortKey::Date);
        assert_eq!(sort.order, SortOrder::Desc);
    }
}
