//! Database schema and connection management

use crate::error::{FitnessError, Result};
use crate::DB_PATH_ENV_VAR;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Owns the SQLite connection for its lifetime; dropping it closes the connection.
pub struct FitnessDatabase {
    pub(crate) conn: Connection,
}

impl FitnessDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::default_path()?)
    }

    /// Open (creating if needed) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory database, mostly useful for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // SQLite leaves foreign keys off unless asked, per connection
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Database path: `FITNESS_TRACKER_DB` if set, otherwise the user data directory
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let data_dir = data_dir().ok_or(FitnessError::DataDir)?;
        Ok(data_dir.join("fitness-tracker").join("fitness.db"))
    }

    /// Create the four tables and their indexes. Safe to run repeatedly.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                user_id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                email TEXT,
                goals TEXT,
                start_weight REAL,
                current_weight REAL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS workouts (
                workout_id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(user_id),
                workout_date TEXT NOT NULL,
                type TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
                calories_burned INTEGER NOT NULL CHECK (calories_burned > 0)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS meals (
                meal_id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(user_id),
                meal_date TEXT NOT NULL,
                meal_type TEXT NOT NULL,
                calories INTEGER NOT NULL CHECK (calories > 0),
                proteins INTEGER NOT NULL CHECK (proteins >= 0),
                carbs INTEGER NOT NULL CHECK (carbs >= 0),
                fats INTEGER NOT NULL CHECK (fats >= 0)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS progress (
                progress_id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(user_id),
                date TEXT NOT NULL,
                weight REAL CHECK (weight IS NULL OR weight > 0),
                body_fat REAL CHECK (body_fat IS NULL OR body_fat BETWEEN 0 AND 100),
                notes TEXT
            )",
            [],
        )?;

        // Every read is owner-scoped and usually date-bounded
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_workouts_user_date
             ON workouts(user_id, workout_date)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_meals_user_date
             ON meals(user_id, meal_date)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_progress_user_date
             ON progress(user_id, date)",
            [],
        )?;

        Ok(())
    }
}
