// ABOUTME: Domain entities for the training planner: workouts, exercises and schedules
// ABOUTME: Defines the shared entity identity type and the explicit validation contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records exchanged over the REST API and persisted by the database
//! layer. Entities carry a numeric `id` that is `0` until storage assigns one.
//!
//! Validation is explicit: each entity implements [`Validate`], returning the
//! ordered list of violated field constraints. The API layer checks it before
//! any service call, so business logic never sees an invalid entity.

/// Exercise belonging to a single workout
pub mod exercise;
/// Training schedule referencing workouts
pub mod schedule;
/// Workout composed of exercises
pub mod workout;

pub use exercise::Exercise;
pub use schedule::Schedule;
pub use workout::Workout;

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer};

/// Server-assigned entity identifier
pub type EntityId = i64;

/// Identifier carried by entities that have not been persisted yet
pub const UNSAVED_ID: EntityId = 0;

/// Field-level validation for request payloads
pub trait Validate {
    /// Violated constraints in declaration order; empty when the value is valid
    fn violations(&self) -> Vec<String>;

    /// Fail with a validation error listing every violation
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when at least one constraint is violated
    fn ensure_valid(&self) -> AppResult<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(&violations))
        }
    }
}

/// Whether a required text field is missing its content
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Read a text field where `null` means empty, so blank-field rules apply to it
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
