//! Record writers and filtered readers

use super::{filters::OwnerScopedQuery, models::*, schema::FitnessDatabase};
use crate::cli::types::{DateRange, MealType, SortOrder, UserId, WorkoutSort, WorkoutType};
use crate::error::Result;
use rusqlite::{params, OptionalExtension, Row};

const WORKOUT_COLUMNS: &str = "SELECT workout_id, user_id, workout_date, type,
        duration_minutes, calories_burned
     FROM workouts";
const MEAL_COLUMNS: &str =
    "SELECT meal_id, user_id, meal_date, meal_type, calories, proteins, carbs, fats FROM meals";
const PROGRESS_COLUMNS: &str =
    "SELECT progress_id, user_id, date, weight, body_fat, notes FROM progress";

/// Optional filters and ordering for a workout listing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkoutQuery {
    pub workout_type: Option<WorkoutType>,
    pub range: DateRange,
    pub sort: WorkoutSort,
}

/// Optional filters for a meal listing; always newest first
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MealQuery {
    pub meal_type: Option<MealType>,
    pub range: DateRange,
}

impl FitnessDatabase {
    /// Insert a user. Fails with an integrity error on a duplicate id or username.
    pub fn add_user(&mut self, user: &User) -> Result<()> {
        self.conn.execute(
            "INSERT INTO users (user_id, username, password_hash, email, goals,
                                 start_weight, current_weight)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                user.user_id,
                user.username,
                user.password_hash,
                user.email,
                user.goals,
                user.start_weight,
                user.current_weight
            ],
        )?;
        tracing::info!(user_id = %user.user_id, username = %user.username, "user created");
        Ok(())
    }

    pub fn get_user(&self, user_id: &UserId) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT user_id, username, password_hash, email, goals, start_weight, current_weight
                 FROM users WHERE user_id = ?",
                params![user_id],
                |row| {
                    Ok(User {
                        user_id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                        email: row.get(3)?,
                        goals: row.get(4)?,
                        start_weight: row.get(5)?,
                        current_weight: row.get(6)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Insert one workout. The owner must exist and the id must be new.
    pub fn add_workout(&mut self, workout: &Workout) -> Result<()> {
        self.conn.execute(
            "INSERT INTO workouts (workout_id, user_id, workout_date, type,
                                    duration_minutes, calories_burned)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                workout.workout_id,
                workout.user_id,
                workout.workout_date,
                workout.workout_type,
                workout.duration_minutes,
                workout.calories_burned
            ],
        )?;
        tracing::info!(
            workout_id = %workout.workout_id,
            user_id = %workout.user_id,
            workout_type = %workout.workout_type,
            "workout logged"
        );
        Ok(())
    }

    /// Owner's workouts matching `query`, in the requested order.
    /// Rows tied on the sort key keep insertion order in the same direction.
    pub fn list_workouts(&self, owner: &UserId, query: &WorkoutQuery) -> Result<Vec<Workout>> {
        OwnerScopedQuery::new(WORKOUT_COLUMNS, owner)
            .and_eq("type", query.workout_type)
            .and_date_range("workout_date", &query.range)
            .order_by(query.sort.key.column(), query.sort.order)
            .order_by("rowid", query.sort.order)
            .fetch_all(&self.conn, row_to_workout)
    }

    /// Insert one meal. The owner must exist and the id must be new.
    pub fn add_meal(&mut self, meal: &Meal) -> Result<()> {
        self.conn.execute(
            "INSERT INTO meals (meal_id, user_id, meal_date, meal_type,
                                 calories, proteins, carbs, fats)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                meal.meal_id,
                meal.user_id,
                meal.meal_date,
                meal.meal_type,
                meal.calories,
                meal.proteins,
                meal.carbs,
                meal.fats
            ],
        )?;
        tracing::info!(
            meal_id = %meal.meal_id,
            user_id = %meal.user_id,
            meal_type = %meal.meal_type,
            "meal logged"
        );
        Ok(())
    }

    /// Owner's meals matching `query`, newest first
    pub fn list_meals(&self, owner: &UserId, query: &MealQuery) -> Result<Vec<Meal>> {
        OwnerScopedQuery::new(MEAL_COLUMNS, owner)
            .and_eq("meal_type", query.meal_type)
            .and_date_range("meal_date", &query.range)
            .order_by("meal_date", SortOrder::Desc)
            .order_by("rowid", SortOrder::Desc)
            .fetch_all(&self.conn, row_to_meal)
    }

    /// Insert one progress entry. The owner must exist and the id must be new.
    pub fn add_progress(&mut self, entry: &ProgressEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO progress (progress_id, user_id, date, weight, body_fat, notes)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                entry.progress_id,
                entry.user_id,
                entry.date,
                entry.weight,
                entry.body_fat,
                entry.notes
            ],
        )?;
        tracing::info!(
            progress_id = %entry.progress_id,
            user_id = %entry.user_id,
            "progress logged"
        );
        Ok(())
    }

    /// Owner's progress entries within `range`, oldest first
    pub fn list_progress(&self, owner: &UserId, range: &DateRange) -> Result<Vec<ProgressEntry>> {
        OwnerScopedQuery::new(PROGRESS_COLUMNS, owner)
            .and_date_range("date", range)
            .order_by("date", SortOrder::Asc)
            .order_by("rowid", SortOrder::Asc)
            .fetch_all(&self.conn, row_to_progress)
    }
}

fn row_to_workout(row: &Row) -> rusqlite::Result<Workout> {
    Ok(Workout {
        workout_id: row.get(0)?,
        user_id: row.get(1)?,
        workout_date: row.get(2)?,
        workout_type: row.get(3)?,
        duration_minutes: row.get(4)?,
        calories_burned: row.get(5)?,
    })
}

fn row_to_meal(row: &Row) -> rusqlite::Result<Meal> {
    Ok(Meal {
        meal_id: row.get(0)?,
        user_id: row.get(1)?,
        meal_date: row.get(2)?,
        meal_type: row.get(3)?,
        calories: row.get(4)?,
        proteins: row.get(5)?,
        carbs: row.get(6)?,
        fats: row.get(7)?,
    })
}

fn row_to_progress(row: &Row) -> rusqlite::Result<ProgressEntry> {
    Ok(ProgressEntry {
        progress_id: row.get(0)?,
        user_id: row.get(1)?,
        date: row.get(2)?,
        weight: row.get(3)?,
        body_fat: row.get(4)?,
        notes: row.get(5)?,
    })
}
