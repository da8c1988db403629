// ABOUTME: Workout CRUD route handlers
// ABOUTME: Thin HTTP adapters over the workout service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::extract::{IdPath, ValidatedJson};
use crate::constants::routes;
use crate::errors::AppError;
use crate::models::Workout;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::WORKOUTS,
                get(Self::handle_list)
                    .post(Self::handle_create)
                    .put(Self::handle_update),
            )
            .route(
                routes::WORKOUT_BY_ID,
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /api/workouts
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(workout): ValidatedJson<Workout>,
    ) -> Result<Response, AppError> {
        let created = resources.workouts.create(workout).await?;
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    /// Handle GET /api/workouts/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        IdPath(id): IdPath,
    ) -> Result<Response, AppError> {
        let workout = resources.workouts.get_by_id(id).await?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle GET /api/workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let workouts = resources.workouts.get_all().await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle PUT /api/workouts
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(workout): ValidatedJson<Workout>,
    ) -> Result<Response, AppError> {
        let updated = resources.workouts.update(workout).await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    /// Handle DELETE /api/workouts/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        IdPath(id): IdPath,
    ) -> Result<Response, AppError> {
        resources.workouts.delete_by_id(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
