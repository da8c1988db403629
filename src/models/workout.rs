// ABOUTME: Workout entity composed of an ordered list of owned exercises
// ABOUTME: Validates the workout name and every nested exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{is_blank, EntityId, Exercise, Validate, UNSAVED_ID};
use crate::constants::validation;
use serde::{Deserialize, Serialize};

/// Workout made of exercises performed in order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Storage-assigned identifier, `0` until persisted
    #[serde(default)]
    pub id: EntityId,
    /// Workout name
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub name: String,
    /// Free-form description
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    /// Exercises owned by this workout, in execution order
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Create an unsaved workout
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            description: description.into(),
            exercises,
        }
    }

    /// Same workout carrying the given identifier
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }
}

impl Validate for Workout {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if is_blank(&self.name) {
            violations.push(validation::WORKOUT_NAME_EMPTY.to_owned());
        }
        for exercise in &self.exercises {
            for violation in exercise.violations() {
                if !violations.contains(&violation) {
                    violations.push(violation);
                }
            }
        }
        violations
    }
}
