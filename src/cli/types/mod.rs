//! Type-safe wrappers and enums for fitness tracking data.

pub mod ids;
pub mod kinds;
pub mod sort;
pub mod time;

pub use ids::{RecordId, UserId};
pub use kinds::{MealType, WorkoutType};
pub use sort::{SortOrder, WorkoutSort, WorkoutSortKey};
pub use time::DateRange;
