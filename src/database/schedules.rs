// ABOUTME: Database operations for training schedules and their workout references
// ABOUTME: Stores the ordered training list in a join table rewritten on every save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DatabaseError;
use crate::models::{EntityId, Schedule, UNSAVED_ID};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashMap;

/// SQL access for the `schedules` and `schedule_trainings` tables
pub struct SchedulesManager {
    pool: SqlitePool,
}

impl SchedulesManager {
    /// Create a manager over the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load a schedule with its ordered trainings
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn get(&self, id: EntityId) -> Result<Option<Schedule>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, amount_of_trainings_per_week
            FROM schedules WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut schedule = row_to_schedule(&row)?;
        schedule.trainings = sqlx::query_scalar(
            r"
            SELECT workout_id FROM schedule_trainings
            WHERE schedule_id = $1
            ORDER BY position
            ",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(schedule))
    }

    /// Load every schedule in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn list(&self) -> Result<Vec<Schedule>, DatabaseError> {
        let schedule_rows = sqlx::query(
            r"
            SELECT id, name, description, amount_of_trainings_per_week
            FROM schedules ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let training_rows = sqlx::query(
            r"
            SELECT schedule_id, workout_id FROM schedule_trainings
            ORDER BY schedule_id, position
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut trainings_by_schedule: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
        for row in &training_rows {
            let schedule_id: EntityId = row.try_get("schedule_id")?;
            trainings_by_schedule
                .entry(schedule_id)
                .or_default()
                .push(row.try_get("workout_id")?);
        }

        schedule_rows
            .iter()
            .map(|row| {
                let mut schedule = row_to_schedule(row)?;
                schedule.trainings = trainings_by_schedule
                    .remove(&schedule.id)
                    .unwrap_or_default();
                Ok(schedule)
            })
            .collect()
    }

    /// Insert or overwrite a schedule and replace its training list
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails, including a training that
    /// references a missing workout; the transaction is rolled back
    pub async fn save(&self, schedule: &Schedule) -> Result<Schedule, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = if schedule.id == UNSAVED_ID {
            sqlx::query(
                r"
                INSERT INTO schedules (name, description, amount_of_trainings_per_week)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(&schedule.name)
            .bind(&schedule.description)
            .bind(schedule.amount_of_trainings_per_week)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid()
        } else {
            sqlx::query(
                r"
                INSERT INTO schedules (id, name, description, amount_of_trainings_per_week)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    description = excluded.description,
                    amount_of_trainings_per_week = excluded.amount_of_trainings_per_week
                ",
            )
            .bind(schedule.id)
            .bind(&schedule.name)
            .bind(&schedule.description)
            .bind(schedule.amount_of_trainings_per_week)
            .execute(&mut *tx)
            .await?;
            schedule.id
        };

        sqlx::query("DELETE FROM schedule_trainings WHERE schedule_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for (position, &workout_id) in schedule.trainings.iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO schedule_trainings (schedule_id, position, workout_id)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(id)
            .bind(i64::try_from(position).unwrap_or(i64::MAX))
            .bind(workout_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Schedule {
            id,
            ..schedule.clone()
        })
    }

    /// Delete a schedule and its training list, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn delete(&self, id: EntityId) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_schedule(row: &SqliteRow) -> Result<Schedule, DatabaseError> {
    Ok(Schedule {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        trainings: Vec::new(),
        amount_of_trainings_per_week: row.try_get("amount_of_trainings_per_week")?,
    })
}
