//! Data models for the storage layer

use crate::cli::types::{MealType, RecordId, UserId, WorkoutType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Owner of all logged records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: Option<String>,
    pub goals: Option<String>,
    pub start_weight: Option<f64>,
    pub current_weight: Option<f64>,
}

/// One logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub workout_id: RecordId,
    pub user_id: UserId,
    pub workout_date: NaiveDate,
    pub workout_type: WorkoutType,
    pub duration_minutes: u32,
    pub calories_burned: u32,
}

impl Workout {
    /// New workout with a freshly generated id
    pub fn new(
        user_id: UserId,
        workout_date: NaiveDate,
        workout_type: WorkoutType,
        duration_minutes: u32,
        calories_burned: u32,
    ) -> Self {
        Self {
            workout_id: RecordId::generate(),
            user_id,
            workout_date,
            workout_type,
            duration_minutes,
            calories_burned,
        }
    }
}

/// One logged meal, macros in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_id: RecordId,
    pub user_id: UserId,
    pub meal_date: NaiveDate,
    pub meal_type: MealType,
    pub calories: u32,
    pub proteins: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl Meal {
    /// New meal with a freshly generated id
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        meal_date: NaiveDate,
        meal_type: MealType,
        calories: u32,
        proteins: u32,
        carbs: u32,
        fats: u32,
    ) -> Self {
        Self {
            meal_id: RecordId::generate(),
            user_id,
            meal_date,
            meal_type,
            calories,
            proteins,
            carbs,
            fats,
        }
    }
}

/// Body measurement snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub progress_id: RecordId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>, // percent
    pub notes: Option<String>,
}

impl ProgressEntry {
    /// New progress entry with a freshly generated id
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        weight: Option<f64>,
        body_fat: Option<f64>,
        notes: Option<String>,
    ) -> Self {
        Self {
            progress_id: RecordId::generate(),
            user_id,
            date,
            weight,
            body_fat,
            notes,
        }
    }
}

/// Workout totals over a date range.
///
/// Counts and sums are zero when nothing matched; the average is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    pub total_workouts: u32,
    pub total_duration_minutes: i64,
    pub average_duration_minutes: Option<f64>,
    pub total_calories_burned: i64,
}

/// Meal totals over a date range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MealMetrics {
    pub total_meals: u32,
    pub total_calories: i64,
    pub average_calories: Option<f64>,
}

/// Summed macronutrients in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub proteins: i64,
    pub carbs: i64,
    pub fats: i64,
}

impl MacroBreakdown {
    pub fn total_grams(&self) -> i64 {
        self.proteins + self.carbs + self.fats
    }

    /// Fraction of total grams per macro as (proteins, carbs, fats).
    /// All zero when nothing was eaten.
    pub fn shares(&self) -> (f64, f64, f64) {
        let total = self.total_grams();
        if total <= 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = total as f64;
        (
            self.proteins as f64 / total,
            self.carbs as f64 / total,
            self.fats as f64 / total,
        )
    }
}

/// Calories eaten versus burned over a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalorieBalance {
    pub consumed: i64,
    pub burned: i64,
}

impl CalorieBalance {
    /// Burned minus consumed; negative means a surplus.
    pub fn balance(&self) -> i64 {
        self.burned - self.consumed
    }
}

/// A recorded weight on a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight: f64,
}
