// ABOUTME: Schedule entity planning referenced workouts over a week
// ABOUTME: Validates the schedule name and the weekly training frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{is_blank, EntityId, Validate, UNSAVED_ID};
use crate::constants::validation;
use serde::{Deserialize, Serialize};

/// Weekly training schedule
///
/// `trainings` references persisted workouts by id; the workouts themselves are
/// shared and are not owned by the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Storage-assigned identifier, `0` until persisted
    #[serde(default)]
    pub id: EntityId,
    /// Schedule name
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub name: String,
    /// Free-form description
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    /// Ordered workout ids making up the schedule
    #[serde(default)]
    pub trainings: Vec<EntityId>,
    /// How many trainings are planned per week, at least one
    #[serde(default)]
    pub amount_of_trainings_per_week: i32,
}

impl Schedule {
    /// Create an unsaved schedule
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        trainings: Vec<EntityId>,
        amount_of_trainings_per_week: i32,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            description: description.into(),
            trainings,
            amount_of_trainings_per_week,
        }
    }

    /// Same schedule carrying the given identifier
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }
}

impl Validate for Schedule {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if is_blank(&self.name) {
            violations.push(validation::SCHEDULE_NAME_EMPTY.to_owned());
        }
        if self.amount_of_trainings_per_week < validation::MIN_TRAININGS_PER_WEEK {
            violations.push(validation::SCHEDULE_TRAININGS_PER_WEEK.to_owned());
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_is_accepted() {
        let schedule = Schedule::new("Name", "", Vec::new(), 1);
        assert!(schedule.ensure_valid().is_ok());
    }

    #[test]
    fn test_zero_trainings_per_week_is_rejected() {
        let schedule = Schedule::new("Name", "Description", Vec::new(), 0);
        let error = schedule.ensure_valid().unwrap_err();
        assert_eq!(
            error.message,
            "Object sent is not valid: [Schedule needs at least one training per week!]"
        );
    }

    #[test]
    fn test_violations_keep_declaration_order() {
        let schedule = Schedule::new("", "Description", Vec::new(), -3);
        assert_eq!(
            schedule.violations(),
            vec![
                "Schedule name cannot be empty!".to_owned(),
                "Schedule needs at least one training per week!".to_owned(),
            ]
        );
    }

    #[test]
    fn test_json_field_names() {
        let schedule = Schedule::new("Name", "Description", vec![3, 1], 2).with_id(7);
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["amountOfTrainingsPerWeek"], 2);
        assert_eq!(json["trainings"], serde_json::json!([3, 1]));
    }

    #[test]
    fn test_missing_or_null_name_reaches_validation() {
        for body in [
            r#"{"amountOfTrainingsPerWeek": 1}"#,
            r#"{"name": null, "description": null, "amountOfTrainingsPerWeek": 1}"#,
        ] {
            let schedule: Schedule = serde_json::from_str(body).unwrap();
            assert_eq!(schedule.name, "");
            assert_eq!(schedule.description, "");
            assert_eq!(
                schedule.violations(),
                vec!["Schedule name cannot be empty!".to_owned()]
            );
        }
    }
}
