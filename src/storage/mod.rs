//! Storage layer for the fitness tracker
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Records and aggregate result types
//! - `schema`: Database connection and schema management
//! - `filters`: Owner-scoped query builder
//! - `queries`: Append-only writers and filtered readers
//! - `analysis`: Counts, sums, averages and calorie balance

pub mod analysis;
pub(crate) mod filters;
pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use queries::{MealQuery, WorkoutQuery};
pub use schema::FitnessDatabase;
