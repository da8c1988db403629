// ABOUTME: Integration tests for the workout CRUD routes
// ABOUTME: Covers exercise composition, validation and delete semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use training_planner::models::{Exercise, Workout};

fn leg_day() -> Workout {
    Workout::new(
        "Leg day",
        "Lower body",
        vec![
            Exercise::new("Squat", "5x5"),
            Exercise::new("Lunge", "3x12"),
        ],
    )
}

#[tokio::test]
async fn test_create_and_fetch_workout_with_exercises() {
    let app = common::create_test_app().await;

    let created: Workout = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&leg_day())
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert!(created.id > 0);
    let names: Vec<&str> = created.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Squat", "Lunge"]);
    assert!(created.exercises.iter().all(|e| e.id > 0));

    let fetched: Workout = AxumTestRequest::get(&format!("/api/workouts/{}", created.id))
        .authorized()
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_with_existing_id_conflicts() {
    let app = common::create_test_app().await;

    let created: Workout = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&leg_day())
        .send(app.clone())
        .await
        .json();

    let other = Workout::new("Arms", "", Vec::new()).with_id(created.id);
    let body: Value = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&other)
        .send(app)
        .await
        .assert_status(StatusCode::CONFLICT)
        .json();
    assert_eq!(
        body["message"],
        format!("Workout with id '{}' already exists.", created.id)
    );
}

#[tokio::test]
async fn test_nested_exercise_violation_is_reported() {
    let app = common::create_test_app().await;

    let body: Value = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&json!({
            "name": "",
            "exercises": [{"name": ""}, {"name": "Plank"}]
        }))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(
        body["message"],
        "Object sent is not valid: [Workout name cannot be empty!, Exercise name cannot be empty!]"
    );
}

#[tokio::test]
async fn test_update_rewrites_exercises() {
    let app = common::create_test_app().await;

    let mut created: Workout = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&leg_day())
        .send(app.clone())
        .await
        .json();

    created.exercises = vec![Exercise::new("Deadlift", "3x5")];
    let updated: Workout = AxumTestRequest::put("/api/workouts")
        .authorized()
        .json(&created)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.exercises.len(), 1);
    assert_eq!(updated.exercises[0].name, "Deadlift");

    let all: Vec<Workout> = AxumTestRequest::get("/api/workouts")
        .authorized()
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(all, vec![updated]);
}

#[tokio::test]
async fn test_update_missing_workout_is_not_found() {
    let app = common::create_test_app().await;

    let body: Value = AxumTestRequest::put("/api/workouts")
        .authorized()
        .json(&leg_day().with_id(9))
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["message"], "Workout with id '9' not found.");
}

#[tokio::test]
async fn test_delete_returns_no_content_and_removes_from_schedules() {
    let app = common::create_test_app().await;

    let workout: Workout = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&leg_day())
        .send(app.clone())
        .await
        .json();

    let schedule: Value = AxumTestRequest::post("/api/schedule")
        .authorized()
        .json(&json!({
            "name": "Week",
            "trainings": [workout.id],
            "amountOfTrainingsPerWeek": 1
        }))
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    let deleted = AxumTestRequest::delete(&format!("/api/workouts/{}", workout.id))
        .authorized()
        .send(app.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(deleted.is_empty());

    AxumTestRequest::get(&format!("/api/workouts/{}", workout.id))
        .authorized()
        .send(app.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let schedule: Value = AxumTestRequest::get(&format!("/api/schedule/{}", schedule["id"]))
        .authorized()
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(schedule["trainings"], json!([]));

    AxumTestRequest::delete(&format!("/api/workouts/{}", workout.id))
        .authorized()
        .send(app)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_or_null_names_are_validation_errors() {
    let app = common::create_test_app().await;

    let body: Value = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&json!({"description": "No name"}))
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(
        body["message"],
        "Object sent is not valid: [Workout name cannot be empty!]"
    );

    let body: Value = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&json!({"name": "Core", "exercises": [{"name": null}]}))
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(
        body["message"],
        "Object sent is not valid: [Exercise name cannot be empty!]"
    );
}

#[tokio::test]
async fn test_update_with_empty_name_is_rejected() {
    let app = common::create_test_app().await;

    let created: Workout = AxumTestRequest::post("/api/workouts")
        .authorized()
        .json(&leg_day())
        .send(app.clone())
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    let body: Value = AxumTestRequest::put("/api/workouts")
        .authorized()
        .json(&json!({"id": created.id, "name": "  "}))
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(
        body["message"],
        "Object sent is not valid: [Workout name cannot be empty!]"
    );

    let stored: Workout = AxumTestRequest::get(&format!("/api/workouts/{}", created.id))
        .authorized()
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(stored, created);
}
