// ABOUTME: Database operations for workouts and the exercises they own
// ABOUTME: Persists a workout and its ordered exercises atomically in one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DatabaseError;
use crate::models::{EntityId, Exercise, Workout, UNSAVED_ID};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashMap;

/// SQL access for the `workouts` and `exercises` tables
pub struct WorkoutsManager {
    pool: SqlitePool,
}

impl WorkoutsManager {
    /// Create a manager over the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load a workout with its exercises
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn get(&self, id: EntityId) -> Result<Option<Workout>, DatabaseError> {
        let row = sqlx::query("SELECT id, name, description FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut workout = row_to_workout(&row)?;
        let exercise_rows = sqlx::query(
            r"
            SELECT id, name, description FROM exercises
            WHERE workout_id = $1
            ORDER BY position, id
            ",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        workout.exercises = exercise_rows
            .iter()
            .map(row_to_exercise)
            .collect::<Result<_, _>>()?;

        Ok(Some(workout))
    }

    /// Load every workout in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails
    pub async fn list(&self) -> Result<Vec<Workout>, DatabaseError> {
        let workout_rows = sqlx::query("SELECT id, name, description FROM workouts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let exercise_rows = sqlx::query(
            r"
            SELECT id, workout_id, name, description FROM exercises
            ORDER BY workout_id, position, id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut exercises_by_workout: HashMap<EntityId, Vec<Exercise>> = HashMap::new();
        for row in &exercise_rows {
            let workout_id: EntityId = row.try_get("workout_id")?;
            exercises_by_workout
                .entry(workout_id)
                .or_default()
                .push(row_to_exercise(row)?);
        }

        workout_rows
            .iter()
            .map(|row| {
                let mut workout = row_to_workout(row)?;
                workout.exercises = exercises_by_workout.remove(&workout.id).unwrap_or_default();
                Ok(workout)
            })
            .collect()
    }

    /// Insert or overwrite a workout and replace its exercises
    ///
    /// An unsaved workout gets a fresh id; otherwise the row with that id is
    /// created or replaced. Exercises are rewritten in order and receive new ids.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; the transaction is rolled back
    pub async fn save(&self, workout: &Workout) -> Result<Workout, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = if workout.id == UNSAVED_ID {
            sqlx::query("INSERT INTO workouts (name, description) VALUES ($1, $2)")
                .bind(&workout.name)
                .bind(&workout.description)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid()
        } else {
            sqlx::query(
                r"
                INSERT INTO workouts (id, name, description) VALUES ($1, $2, $3)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    description = excluded.description
                ",
            )
            .bind(workout.id)
            .bind(&workout.name)
            .bind(&workout.description)
            .execute(&mut *tx)
            .await?;
            workout.id
        };

        sqlx::query("DELETE FROM exercises WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let mut exercises = Vec::with_capacity(workout.exercises.len());
        for (position, exercise) in workout.exercises.iter().enumerate() {
            let exercise_id = sqlx::query(
                r"
                INSERT INTO exercises (workout_id, position, name, description)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(id)
            .bind(i64::try_from(position).unwrap_or(i64::MAX))
            .bind(&exercise.name)
            .bind(&exercise.description)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            exercises.push(Exercise {
                id: exercise_id,
                name: exercise.name.clone(),
                description: exercise.description.clone(),
            });
        }

        tx.commit().await?;

        Ok(Workout {
            id,
            name: workout.name.clone(),
            description: workout.description.clone(),
            exercises,
        })
    }

    /// Delete a workout and its exercises, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn delete(&self, id: EntityId) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_workout(row: &SqliteRow) -> Result<Workout, DatabaseError> {
    Ok(Workout {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        exercises: Vec::new(),
    })
}

fn row_to_exercise(row: &SqliteRow) -> Result<Exercise, DatabaseError> {
    Ok(Exercise {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
    })
}
