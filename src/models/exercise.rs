// ABOUTME: Exercise entity owned by exactly one workout
// ABOUTME: Carries name and description plus the name validation rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{is_blank, EntityId, Validate, UNSAVED_ID};
use crate::constants::validation;
use serde::{Deserialize, Serialize};

/// Single exercise within a workout
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Storage-assigned identifier, reassigned every time the owning workout is saved
    #[serde(default)]
    pub id: EntityId,
    /// Exercise name
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub name: String,
    /// Free-form description
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
}

impl Exercise {
    /// Create an unsaved exercise
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Validate for Exercise {
    fn violations(&self) -> Vec<String> {
        if is_blank(&self.name) {
            vec![validation::EXERCISE_NAME_EMPTY.to_owned()]
        } else {
            Vec::new()
        }
    }
}
