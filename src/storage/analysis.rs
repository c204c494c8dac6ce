//! Aggregates over a user's records: counts, sums, averages and calorie balance.
//!
//! Sums are coalesced to zero in SQL. Averages stay `NULL` -> `None` when no
//! row matched, so callers can tell "no data" apart from a real zero.

use super::{filters::OwnerScopedQuery, models::*, schema::FitnessDatabase};
use crate::cli::types::{DateRange, SortOrder, UserId};
use crate::error::Result;
use rusqlite::Connection;

impl FitnessDatabase {
    /// Count, total duration, average duration and total calories burned
    pub fn workout_metrics(&self, owner: &UserId, range: &DateRange) -> Result<WorkoutMetrics> {
        OwnerScopedQuery::new(
            "SELECT COUNT(*),
                    COALESCE(SUM(duration_minutes), 0),
                    AVG(duration_minutes),
                    COALESCE(SUM(calories_burned), 0)
             FROM workouts",
            owner,
        )
        .and_date_range("workout_date", range)
        .fetch_one(&self.conn, |row| {
            Ok(WorkoutMetrics {
                total_workouts: row.get(0)?,
                total_duration_minutes: row.get(1)?,
                average_duration_minutes: row.get(2)?,
                total_calories_burned: row.get(3)?,
            })
        })
    }

    /// Count, total calories and average calories per meal
    pub fn meal_metrics(&self, owner: &UserId, range: &DateRange) -> Result<MealMetrics> {
        OwnerScopedQuery::new(
            "SELECT COUNT(*), COALESCE(SUM(calories), 0), AVG(calories) FROM meals",
            owner,
        )
        .and_date_range("meal_date", range)
        .fetch_one(&self.conn, |row| {
            Ok(MealMetrics {
                total_meals: row.get(0)?,
                total_calories: row.get(1)?,
                average_calories: row.get(2)?,
            })
        })
    }

    /// Summed macros, or `None` when no meal falls in the range
    pub fn macro_breakdown(
        &self,
        owner: &UserId,
        range: &DateRange,
    ) -> Result<Option<MacroBreakdown>> {
        let (meals, breakdown) = OwnerScopedQuery::new(
            "SELECT COUNT(*),
                    COALESCE(SUM(proteins), 0),
                    COALESCE(SUM(carbs), 0),
                    COALESCE(SUM(fats), 0)
             FROM meals",
            owner,
        )
        .and_date_range("meal_date", range)
        .fetch_one(&self.conn, |row| {
            Ok((
                row.get::<_, u32>(0)?,
                MacroBreakdown {
                    proteins: row.get(1)?,
                    carbs: row.get(2)?,
                    fats: row.get(3)?,
                },
            ))
        })?;

        Ok((meals > 0).then_some(breakdown))
    }

    /// Calories consumed (meals) and burned (workouts) over the same range.
    ///
    /// Both sums are read inside one transaction so they see the same snapshot.
    pub fn calorie_balance(&self, owner: &UserId, range: &DateRange) -> Result<CalorieBalance> {
        let tx = self.conn.unchecked_transaction()?;
        let consumed = sum_column(&tx, "meals", "calories", "meal_date", owner, range)?;
        let burned = sum_column(&tx, "workouts", "calories_burned", "workout_date", owner, range)?;
        tx.commit()?;

        Ok(CalorieBalance { consumed, burned })
    }

    /// Recorded weights within `range`, oldest first. Entries without a weight are skipped.
    pub fn weight_trend(&self, owner: &UserId, range: &DateRange) -> Result<Vec<WeightPoint>> {
        OwnerScopedQuery::new("SELECT date, weight FROM progress", owner)
            .and_date_range("date", range)
            .and_not_null("weight")
            .order_by("date", SortOrder::Asc)
            .order_by("rowid", SortOrder::Asc)
            .fetch_all(&self.conn, |row| {
                Ok(WeightPoint {
                    date: row.get(0)?,
                    weight: row.get(1)?,
                })
            })
    }

    /// Kilograms left to lose: latest recorded weight minus `goal`, floored at zero.
    /// `None` when no weight has been recorded.
    pub fn weight_to_goal(&self, owner: &UserId, goal: f64) -> Result<Option<f64>> {
        let latest = self.latest_weight(owner)?;
        Ok(latest.map(|weight| (weight - goal).max(0.0)))
    }

    /// Most recent recorded weight; the latest insert wins on the same day
    pub fn latest_weight(&self, owner: &UserId) -> Result<Option<f64>> {
        let latest = OwnerScopedQuery::new("SELECT weight FROM progress", owner)
            .and_not_null("weight")
            .order_by("date", SortOrder::Desc)
            .order_by("rowid", SortOrder::Desc)
            .limit(1)
            .fetch_all(&self.conn, |row| row.get::<_, f64>(0))?;
        Ok(latest.first().copied())
    }
}

fn sum_column(
    conn: &Connection,
    table: &'static str,
    column: &'static str,
    date_column: &'static str,
    owner: &UserId,
    range: &DateRange,
) -> Result<i64> {
    OwnerScopedQuery::new(
        &format!("SELECT COALESCE(SUM({column}), 0) FROM {table}"),
        owner,
    )
    .and_date_range(date_column, range)
    .fetch_one(conn, |row| row.get(0))
}
