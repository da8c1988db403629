// ABOUTME: Schedule business rules: id collision on create, existence on read/update
// ABOUTME: Also checks that every referenced training points at a stored workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::workouts;
use crate::database::{ScheduleRepository, WorkoutRepository};
use crate::errors::{AppError, AppResult};
use crate::models::{EntityId, Schedule};
use std::sync::Arc;
use tracing::info;

/// Schedule lifecycle service
#[derive(Clone)]
pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepository>,
    workouts: Arc<dyn WorkoutRepository>,
}

impl ScheduleService {
    /// Create a service over the schedule repository; workouts are used to
    /// resolve training references
    #[must_use]
    pub fn new(
        repository: Arc<dyn ScheduleRepository>,
        workouts: Arc<dyn WorkoutRepository>,
    ) -> Self {
        Self {
            repository,
            workouts,
        }
    }

    /// Persist a new schedule
    ///
    /// # Errors
    ///
    /// `RESOURCE_ALREADY_EXISTS` when a schedule with the same id is stored,
    /// `RESOURCE_NOT_FOUND` when a training references a missing workout
    #[tracing::instrument(skip(self, schedule), fields(schedule_id = schedule.id))]
    pub async fn create(&self, schedule: Schedule) -> AppResult<Schedule> {
        if self.repository.find_by_id(schedule.id).await?.is_some() {
            return Err(already_exists(schedule.id));
        }
        self.ensure_trainings_exist(&schedule).await?;

        let saved = self.repository.save(&schedule).await?;
        info!(schedule_id = saved.id, "Schedule created");
        Ok(saved)
    }

    /// Fetch one schedule
    ///
    /// # Errors
    ///
    /// `RESOURCE_NOT_FOUND` when no schedule has this id
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: EntityId) -> AppResult<Schedule> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetch every schedule in storage order
    ///
    /// # Errors
    ///
    /// `DATABASE_ERROR` when storage fails
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> AppResult<Vec<Schedule>> {
        Ok(self.repository.find_all().await?)
    }

    /// Replace a stored schedule
    ///
    /// # Errors
    ///
    /// `RESOURCE_NOT_FOUND` when no schedule has this id or a training
    /// references a missing workout; nothing is written in either case
    #[tracing::instrument(skip(self, schedule), fields(schedule_id = schedule.id))]
    pub async fn update(&self, schedule: Schedule) -> AppResult<Schedule> {
        if self.repository.find_by_id(schedule.id).await?.is_none() {
            return Err(not_found(schedule.id));
        }
        self.ensure_trainings_exist(&schedule).await?;

        let saved = self.repository.save(&schedule).await?;
        info!(schedule_id = saved.id, "Schedule updated");
        Ok(saved)
    }

    /// Remove a schedule; succeeds whether or not it existed
    ///
    /// # Errors
    ///
    /// `DATABASE_ERROR` when storage fails
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_id(&self, id: EntityId) -> AppResult<()> {
        self.repository.delete_by_id(id).await?;
        info!(schedule_id = id, "Schedule deleted");
        Ok(())
    }

    async fn ensure_trainings_exist(&self, schedule: &Schedule) -> AppResult<()> {
        let mut checked: Vec<EntityId> = Vec::with_capacity(schedule.trainings.len());
        for &workout_id in &schedule.trainings {
            if checked.contains(&workout_id) {
                continue;
            }
            if self.workouts.find_by_id(workout_id).await?.is_none() {
                return Err(workouts::not_found(workout_id));
            }
            checked.push(workout_id);
        }
        Ok(())
    }
}

fn not_found(id: EntityId) -> AppError {
    AppError::not_found(format!("Schedule with id '{id}' not found."))
}

fn already_exists(id: EntityId) -> AppError {
    AppError::already_exists(format!("Schedule with id '{id}' already exists."))
}
