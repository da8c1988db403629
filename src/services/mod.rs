// ABOUTME: Domain service layer enforcing business rules on top of the repositories
// ABOUTME: Existence checks on read/update and duplicate checks on create for each entity kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services receive already-validated entities from the API layer and return
//! explicit [`AppResult`](crate::errors::AppResult) values. "Already exists" is
//! decided by id collision only; two entities with identical content but
//! different ids are never duplicates. Deletes are idempotent.

/// Schedule lifecycle operations
pub mod schedules;
/// Workout lifecycle operations
pub mod workouts;

pub use schedules::ScheduleService;
pub use workouts::WorkoutService;
