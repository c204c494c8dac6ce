//! Error types for the fitness tracker

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FitnessError>;

#[derive(Error, Debug)]
pub enum FitnessError {
    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("Integrity constraint violated: {message}")]
    Integrity { message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid sort key: {key} (expected one of: date, calories, duration)")]
    InvalidSortKey { key: String },

    #[error("Invalid sort order: {order} (expected asc or desc)")]
    InvalidSortOrder { order: String },

    #[error("Invalid workout type: {value}")]
    InvalidWorkoutType { value: String },

    #[error("Invalid meal type: {value}")]
    InvalidMealType { value: String },

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Could not determine data directory")]
    DataDir,
}

impl From<rusqlite::Error> for FitnessError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                FitnessError::Integrity {
                    message: message.unwrap_or_else(|| code.to_string()),
                }
            }
            other => FitnessError::Database(other),
        }
    }
}
