// ABOUTME: Schedule repository implementation backed by SQLite
// ABOUTME: Delegates to the schedules manager and logs storage outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ScheduleRepository;
use crate::database::schedules::SchedulesManager;
use crate::database::{Database, DatabaseError};
use crate::models::{EntityId, Schedule};
use async_trait::async_trait;
use tracing::debug;

/// `SQLite` implementation of `ScheduleRepository`
pub struct ScheduleRepositoryImpl {
    db: Database,
}

impl ScheduleRepositoryImpl {
    /// Create a new `ScheduleRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn manager(&self) -> SchedulesManager {
        SchedulesManager::new(self.db.pool().clone())
    }
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Schedule>, DatabaseError> {
        self.manager().get(id).await
    }

    async fn find_all(&self) -> Result<Vec<Schedule>, DatabaseError> {
        self.manager().list().await
    }

    async fn save(&self, schedule: &Schedule) -> Result<Schedule, DatabaseError> {
        let saved = self.manager().save(schedule).await?;
        debug!(schedule_id = saved.id, trainings = saved.trainings.len(), "Schedule saved");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), DatabaseError> {
        let removed = self.manager().delete(id).await?;
        debug!(schedule_id = id, removed, "Schedule delete executed");
        Ok(())
    }
}
