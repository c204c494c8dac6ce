//! Personal fitness tracker library
//!
//! A small data-access layer over SQLite for logging workouts, meals and
//! body measurements, with owner-scoped filtered listings and aggregate
//! metrics (counts, sums, averages and calorie balance).
//!
//! ## Features
//!
//! - **Append-only records**: workouts, meals and progress entries are written once, never edited
//! - **Filtered listings**: optional type and inclusive date filters, whitelisted sort keys
//! - **Aggregates**: totals and averages where "no data" stays distinct from zero
//! - **Calorie balance**: meals and workouts summed over the same range from one snapshot
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fitness_tracker::{storage::*, DateRange, UserId, WorkoutType};
//!
//! # fn example() -> fitness_tracker::Result<()> {
//! let mut db = FitnessDatabase::new_in_memory()?;
//! let owner = UserId::new("12345");
//! db.add_user(&User {
//!     user_id: owner.clone(),
//!     username: "me".to_string(),
//!     password_hash: "!".to_string(),
//!     email: None,
//!     goals: None,
//!     start_weight: None,
//!     current_weight: None,
//! })?;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! db.add_workout(&Workout::new(owner.clone(), day, WorkoutType::Cardio, 30, 300))?;
//!
//! let metrics = db.workout_metrics(&owner, &DateRange::all())?;
//! assert_eq!(metrics.total_calories_burned, 300);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FITNESS_TRACKER_DB=~/fitness.db        # database file
//! export FITNESS_TRACKER_USER_ID=12345          # acting user
//! export FITNESS_TRACKER_GOAL_WEIGHT=75         # goal weight in kg
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    DateRange, MealType, RecordId, SortOrder, UserId, WorkoutSort, WorkoutSortKey, WorkoutType,
};
pub use error::{FitnessError, Result};

pub const DB_PATH_ENV_VAR: &str = "FITNESS_TRACKER_DB";
pub const USER_ID_ENV_VAR: &str = "FITNESS_TRACKER_USER_ID";
pub const GOAL_WEIGHT_ENV_VAR: &str = "FITNESS_TRACKER_GOAL_WEIGHT";

/// The single user of a default deployment
pub const DEFAULT_USER_ID: &str = "12345";
/// Goal weight in kg when none is configured
pub const DEFAULT_GOAL_WEIGHT: f64 = 75.0;
