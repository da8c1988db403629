// ABOUTME: Persistence gateway traits used by the service layer
// ABOUTME: Storage-independent find/save/delete capabilities per entity kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository traits
//!
//! The service layer depends only on these traits, so storage can be swapped
//! (or mocked in tests) without touching business rules. Implementations must
//! be safe to call concurrently from many requests.

mod schedule_repository;
mod workout_repository;

pub use schedule_repository::ScheduleRepositoryImpl;
pub use workout_repository::WorkoutRepositoryImpl;

use super::DatabaseError;
use crate::models::{EntityId, Schedule, Workout};
use async_trait::async_trait;

/// Storage gateway for workouts
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Find a workout by id
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Workout>, DatabaseError>;

    /// All workouts in storage order
    async fn find_all(&self) -> Result<Vec<Workout>, DatabaseError>;

    /// Persist a workout, assigning an id when it has none
    async fn save(&self, workout: &Workout) -> Result<Workout, DatabaseError>;

    /// Remove a workout; absent ids are ignored
    async fn delete_by_id(&self, id: EntityId) -> Result<(), DatabaseError>;
}

/// Storage gateway for schedules
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Find a schedule by id
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Schedule>, DatabaseError>;

    /// All schedules in storage order
    async fn find_all(&self) -> Result<Vec<Schedule>, DatabaseError>;

    /// Persist a schedule, assigning an id when it has none
    async fn save(&self, schedule: &Schedule) -> Result<Schedule, DatabaseError>;

    /// Remove a schedule; absent ids are ignored
    async fn delete_by_id(&self, id: EntityId) -> Result<(), DatabaseError>;
}
