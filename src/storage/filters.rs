//! Owner-scoped query builder.
//!
//! Every query starts from `WHERE user_id = ?` and each optional filter is
//! appended conjunctively as a bound parameter. Column names only ever come
//! from `&'static str` values chosen in this crate.

use crate::cli::types::{DateRange, SortOrder, UserId};
use crate::error::Result;
use rusqlite::{params_from_iter, Connection, Row, ToSql};

pub(crate) struct OwnerScopedQuery {
    sql: String,
    params: Vec<Box<dyn ToSql>>,
    ordered: bool,
}

impl OwnerScopedQuery {
    /// `select` is everything up to (not including) the WHERE clause
    pub(crate) fn new(select: &str, owner: &UserId) -> Self {
        let mut sql = String::from(select);
        sql.push_str(" WHERE user_id = ?");
        Self {
            sql,
            params: vec![Box::new(owner.clone())],
            ordered: false,
        }
    }

    /// Append `AND column = ?` when a value is present
    pub(crate) fn and_eq<T: ToSql + 'static>(
        mut self,
        column: &'static str,
        value: Option<T>,
    ) -> Self {
        if let Some(v) = value {
            self.sql.push_str(" AND ");
            self.sql.push_str(column);
            self.sql.push_str(" = ?");
            self.params.push(Box::new(v));
        }
        self
    }

    /// Append inclusive bounds for whichever ends of the range are set
    pub(crate) fn and_date_range(mut self, column: &'static str, range: &DateRange) -> Self {
        if let Some(start) = range.start() {
            self.sql.push_str(" AND ");
            self.sql.push_str(column);
            self.sql.push_str(" >= ?");
            self.params.push(Box::new(start));
        }
        if let Some(end) = range.end() {
            self.sql.push_str(" AND ");
            self.sql.push_str(column);
            self.sql.push_str(" <= ?");
            self.params.push(Box::new(end));
        }
        self
    }

    /// Append `AND column IS NOT NULL`
    pub(crate) fn and_not_null(mut self, column: &'static str) -> Self {
        self.sql.push_str(" AND ");
        self.sql.push_str(column);
        self.sql.push_str(" IS NOT NULL");
        self
    }

    /// Append a sort column; later calls add lower-priority keys
    pub(crate) fn order_by(mut self, column: &'static str, order: SortOrder) -> Self {
        self.sql.push_str(if self.ordered { ", " } else { " ORDER BY " });
        self.sql.push_str(column);
        self.sql.push(' ');
        self.sql.push_str(order.as_sql());
        self.ordered = true;
        self
    }

    pub(crate) fn limit(mut self, limit: u32) -> Self {
        self.sql.push_str(" LIMIT ?");
        self.params.push(Box::new(limit));
        self
    }

    #[cfg(test)]
    pub(crate) fn sql(&self) -> &str {
        &self.sql
    }

    #[cfg(test)]
    pub(crate) fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Run the query and map every row
    pub(crate) fn fetch_all<T, F>(&self, conn: &Connection, mut map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        tracing::debug!(sql = %self.sql, params = self.params.len(), "query");
        let mut stmt = conn.prepare(&self.sql)?;
        let rows = stmt.query_map(
            params_from_iter(self.params.iter().map(|p| p.as_ref())),
            |row| map(row),
        )?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Run a query that always yields exactly one row (aggregates)
    pub(crate) fn fetch_one<T, F>(&self, conn: &Connection, map: F) -> Result<T>
    where
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        tracing::debug!(sql = %self.sql, params = self.params.len(), "aggregate");
        let mut stmt = conn.prepare(&self.sql)?;
        let value = stmt.query_row(
            params_from_iter(self.params.iter().map(|p| p.as_ref())),
            map,
        )?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::WorkoutType;
    use chrono::NaiveDate;

    fn owner() -> UserId {
        UserId::new("u1")
    }

    #[test]
    fn test_base_query_is_owner_scoped() {
        let query = OwnerScopedQuery::new("SELECT * FROM workouts", &owner());
        assert_eq!(query.sql(), "SELECT * FROM workouts WHERE user_id = ?");
        assert_eq!(query.param_count(), 1);
    }

    #[test]
    fn test_absent_filters_add_nothing() {
        let query = OwnerScopedQuery::new("SELECT * FROM workouts", &owner())
            .and_eq("type", None::<WorkoutType>)
            .and_date_range("workout_date", &DateRange::all());
        assert_eq!(query.sql(), "SELECT * FROM workouts WHERE user_id = ?");
        assert_eq!(query.param_count(), 1);
    }

    #[test]
    fn test_filters_are_conjunctive_and_bound() {
        let range = DateRange::between(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        )
        .unwrap();
        let query = OwnerScopedQuery::new("SELECT * FROM workouts", &owner())
            .and_eq("type", Some(WorkoutType::Cardio))
            .and_date_range("workout_date", &range);
        assert_eq!(
            query.sql(),
            "SELECT * FROM workouts WHERE user_id = ? AND type = ? \
             AND workout_date >= ? AND workout_date <= ?"
        );
        assert_eq!(query.param_count(), 4);
    }

    #[test]
    fn test_half_open_range() {
        let range =
            DateRange::new(None, Some(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())).unwrap();
        let query = OwnerScopedQuery::new("SELECT * FROM meals", &owner())
            .and_date_range("meal_date", &range);
        assert_eq!(
            query.sql(),
            "SELECT * FROM meals WHERE user_id = ? AND meal_date <= ?"
        );
    }

    #[test]
    fn test_not_null_and_limit() {
        let query = OwnerScopedQuery::new("SELECT weight FROM progress", &owner())
            .and_not_null("weight")
            .order_by("date", SortOrder::Desc)
            .limit(1);
        assert_eq!(
            query.sql(),
            "SELECT weight FROM progress WHERE user_id = ? AND weight IS NOT NULL \
             ORDER BY date DESC LIMIT ?"
        );
        assert_eq!(query.param_count(), 2);
    }

    #[test]
    fn test_multiple_sort_keys() {
        let query = OwnerScopedQuery::new("SELECT * FROM workouts", &owner())
            .order_by("calories_burned", SortOrder::Asc)
            .order_by("rowid", SortOrder::Asc);
        assert_eq!(
            query.sql(),
            "SELECT * FROM workouts WHERE user_id = ? ORDER BY calories_burned ASC, rowid ASC"
        );
    }
}
