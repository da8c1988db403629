// ABOUTME: Database management for workouts, exercises and schedules on SQLite
// ABOUTME: Owns the connection pool and creates the schema at start-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! The [`Database`] handle wraps a `SQLite` pool and is built once at process
//! start. Entity-specific SQL lives in the [`workouts`] and [`schedules`]
//! managers; the [`repositories`] module exposes the storage-independent
//! gateway traits the service layer depends on.

mod errors;
/// Persistence gateway traits and their `SQLite` implementations
pub mod repositories;
/// Schedule rows and their ordered workout references
pub mod schedules;
/// Workout rows and their owned exercises
pub mod workouts;

pub use errors::DatabaseError;
pub use repositories::{
    ScheduleRepository, ScheduleRepositoryImpl, WorkoutRepository, WorkoutRepositoryImpl,
};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Database handle shared by every repository
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// In-memory databases are pinned to a single long-lived connection so every
    /// request observes the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails or the
    /// schema cannot be created
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DatabaseError::ConnectionFailed {
                context: format!("invalid database url '{database_url}': {e}"),
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed {
                context: e.to_string(),
            })?;

        let db = Self { pool };
        db.migrate().await?;

        info!("Database ready at {}", database_url);
        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables if they do not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.migrate_workouts().await?;
        self.migrate_schedules().await?;
        debug!("Database migrations applied");
        Ok(())
    }

    async fn migrate_workouts(&self) -> Result<(), DatabaseError> {
        self.execute_ddl(
            "workouts",
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .await?;

        // Exercises are owned by their workout and go with it
        self.execute_ddl(
            "exercises",
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .await?;

        self.execute_ddl(
            "idx_exercises_workout",
            "CREATE INDEX IF NOT EXISTS idx_exercises_workout ON exercises(workout_id, position)",
        )
        .await
    }

    async fn migrate_schedules(&self) -> Result<(), DatabaseError> {
        self.execute_ddl(
            "schedules",
            r"
            CREATE TABLE IF NOT EXISTS schedules (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                amount_of_trainings_per_week INTEGER NOT NULL
            )
            ",
        )
        .await?;

        // Deleting a workout drops it from every schedule that referenced it
        self.execute_ddl(
            "schedule_trainings",
            r"
            CREATE TABLE IF NOT EXISTS schedule_trainings (
                schedule_id INTEGER NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                workout_id INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                PRIMARY KEY (schedule_id, position)
            )
            ",
        )
        .await
    }

    async fn execute_ddl(&self, name: &str, statement: &str) -> Result<(), DatabaseError> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::MigrationFailed {
                context: format!("{name}: {e}"),
            })?;
        Ok(())
    }
}
