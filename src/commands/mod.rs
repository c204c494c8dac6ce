//! Command implementations for the fitness tracker CLI

pub mod dashboard;
pub mod meals;
pub mod progress;
pub mod users;
pub mod workouts;


use crate::{
    cli::types::UserId,
    error::{FitnessError, Result},
    storage::{FitnessDatabase, User},
    DEFAULT_GOAL_WEIGHT, DEFAULT_USER_ID, GOAL_WEIGHT_ENV_VAR, USER_ID_ENV_VAR,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Database handle plus the user every command acts for
pub struct CommandContext {
    pub db: FitnessDatabase,
    pub user_id: UserId,
}

impl CommandContext {
    pub fn new(db: FitnessDatabase, user_id: UserId) -> Self {
        Self { db, user_id }
    }

    /// Load the acting user, failing if it has not been created yet
    pub fn require_user(&self) -> Result<User> {
        self.db
            .get_user(&self.user_id)?
            .ok_or_else(|| FitnessError::UserNotFound {
                user_id: self.user_id.to_string(),
            })
    }
}

/// Resolve the acting user: explicit flag, then `FITNESS_TRACKER_USER_ID`, then the default user
pub fn resolve_user_id(user_id: Option<UserId>) -> UserId {
    user_id
        .or_else(|| {
            std::env::var(USER_ID_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|s| UserId::new(s.trim()))
        })
        .unwrap_or_else(|| UserId::new(DEFAULT_USER_ID))
}

/// Resolve the goal weight: explicit flag, then `FITNESS_TRACKER_GOAL_WEIGHT`, then the default
pub fn resolve_goal_weight(goal_weight: Option<f64>) -> f64 {
    goal_weight
        .or_else(|| {
            std::env::var(GOAL_WEIGHT_ENV_VAR)
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok())
        })
        .unwrap_or(DEFAULT_GOAL_WEIGHT)
}

/// Local calendar date, used when a record is logged without `--date`
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(crate) fn fmt_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
