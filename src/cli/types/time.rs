//! Date helpers: inclusive date ranges for filters and aggregates.

use crate::error::{FitnessError, Result};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Inclusive date range. Either bound may be open.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use fitness_tracker::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let range = DateRange::between(start, end).unwrap();
/// assert!(range.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
/// assert!(DateRange::between(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Range with no bounds; matches every date.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a range from optional bounds, rejecting `start > end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(FitnessError::InvalidDateRange { start: s, end: e });
            }
        }
        Ok(Self { start, end })
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Self::new(Some(start), Some(end))
    }

    /// Monday of `today`'s ISO week through `today`.
    pub fn week_to_date(today: NaiveDate) -> Self {
        let offset = u64::from(today.weekday().num_days_from_monday());
        let monday = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
        Self {
            start: Some(monday),
            end: Some(today),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "all time"),
            (Some(s), None) => write!(f, "since {}", s),
            (None, Some(e)) => write!(f, "through {}", e),
            (Some(s), Some(e)) => write!(f, "{} to {}", s, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::between(date(2025, 3, 1), date(2025, 3, 7)).unwrap();
        assert!(range.contains(date(2025, 3, 1)));
        assert!(range.contains(date(2025, 3, 7)));
        assert!(!range.contains(date(2025, 2, 28)));
        assert!(!range.contains(date(2025, 3, 8)));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let day = date(2025, 6, 15);
        let range = DateRange::between(day, day).unwrap();
        assert!(range.contains(day));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = DateRange::between(date(2025, 3, 7), date(2025, 3, 1));
        assert!(matches!(result, Err(FitnessError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_open_ranges() {
        let since = DateRange::new(Some(date(2025, 1, 1)), None).unwrap();
        assert!(since.contains(date(2030, 1, 1)));
        assert!(!since.contains(date(2024, 12, 31)));
        assert!(DateRange::all().is_unbounded());
        assert!(DateRange::all().contains(date(1999, 1, 1)));
    }

    #[test]
    fn test_week_to_date_starts_on_monday() {
        // 2025-10-16 is a Thursday
        let range = DateRange::week_to_date(date(2025, 10, 16));
        assert_eq!(range.start(), Some(date(2025, 10, 13)));
        assert_eq!(range.end(), Some(date(2025, 10, 16)));

        let monday = DateRange::week_to_date(date(2025, 10, 13));
        assert_eq!(monday.start(), Some(date(2025, 10, 13)));

        // Sunday belongs to the week that started six days earlier
        let sunday = DateRange::week_to_date(date(2025, 10, 19));
        assert_eq!(sunday.start(), Some(date(2025, 10, 13)));
    }

    #[test]
    fn test_display() {
        assert_eq!(DateRange::all().to_string(), "all time");
        let range = DateRange::between(date(2025, 1, 1), date(2025, 1, 2)).unwrap();
        assert_eq!(range.to_string(), "2025-01-01 to 2025-01-02");
    }
}
