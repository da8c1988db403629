// ABOUTME: Workout repository implementation backed by SQLite
// ABOUTME: Delegates to the workouts manager and logs storage outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutRepository;
use crate::database::workouts::WorkoutsManager;
use crate::database::{Database, DatabaseError};
use crate::models::{EntityId, Workout};
use async_trait::async_trait;
use tracing::debug;

/// `SQLite` implementation of `WorkoutRepository`
pub struct WorkoutRepositoryImpl {
    db: Database,
}

impl WorkoutRepositoryImpl {
    /// Create a new `WorkoutRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn manager(&self) -> WorkoutsManager {
        WorkoutsManager::new(self.db.pool().clone())
    }
}

#[async_trait]
impl WorkoutRepository for WorkoutRepositoryImpl {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Workout>, DatabaseError> {
        self.manager().get(id).await
    }

    async fn find_all(&self) -> Result<Vec<Workout>, DatabaseError> {
        self.manager().list().await
    }

    async fn save(&self, workout: &Workout) -> Result<Workout, DatabaseError> {
        let saved = self.manager().save(workout).await?;
        debug!(workout_id = saved.id, exercises = saved.exercises.len(), "Workout saved");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), DatabaseError> {
        let removed = self.manager().delete(id).await?;
        debug!(workout_id = id, removed, "Workout delete executed");
        Ok(())
    }
}
