// ABOUTME: Workout business rules: create without id collision, read/update existing only
// ABOUTME: Protocol-agnostic service used by the REST handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::WorkoutRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{EntityId, Workout};
use std::sync::Arc;
use tracing::info;

/// Workout lifecycle service
#[derive(Clone)]
pub struct WorkoutService {
    repository: Arc<dyn WorkoutRepository>,
}

impl WorkoutService {
    /// Create a service over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn WorkoutRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new workout
    ///
    /// # Errors
    ///
    /// `RESOURCE_ALREADY_EXISTS` when a workout with the same id is stored,
    /// `DATABASE_ERROR` when storage fails
    #[tracing::instrument(skip(self, workout), fields(workout_id = workout.id))]
    pub async fn create(&self, workout: Workout) -> AppResult<Workout> {
        if self.repository.find_by_id(workout.id).await?.is_some() {
            return Err(already_exists(workout.id));
        }

        let saved = self.repository.save(&workout).await?;
        info!(workout_id = saved.id, "Workout created");
        Ok(saved)
    }

    /// Fetch one workout
    ///
    /// # Errors
    ///
    /// `RESOURCE_NOT_FOUND` when no workout has this id
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: EntityId) -> AppResult<Workout> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetch every workout in storage order
    ///
    /// # Errors
    ///
    /// `DATABASE_ERROR` when storage fails
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> AppResult<Vec<Workout>> {
        Ok(self.repository.find_all().await?)
    }

    /// Replace a stored workout
    ///
    /// # Errors
    ///
    /// `RESOURCE_NOT_FOUND` when no workout has this id; nothing is created
    #[tracing::instrument(skip(self, workout), fields(workout_id = workout.id))]
    pub async fn update(&self, workout: Workout) -> AppResult<Workout> {
        if self.repository.find_by_id(workout.id).await?.is_none() {
            return Err(not_found(workout.id));
        }

        let saved = self.repository.save(&workout).await?;
        info!(workout_id = saved.id, "Workout updated");
        Ok(saved)
    }

    /// Remove a workout; succeeds whether or not it existed
    ///
    /// # Errors
    ///
    /// `DATABASE_ERROR` when storage fails
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_id(&self, id: EntityId) -> AppResult<()> {
        self.repository.delete_by_id(id).await?;
        info!(workout_id = id, "Workout deleted");
        Ok(())
    }
}

pub(crate) fn not_found(id: EntityId) -> AppError {
    AppError::not_found(format!("Workout with id '{id}' not found."))
}

fn already_exists(id: EntityId) -> AppError {
    AppError::already_exists(format!("Workout with id '{id}' already exists."))
}
