// ABOUTME: Schedule CRUD route handlers
// ABOUTME: Thin HTTP adapters over the schedule service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::extract::{IdPath, ValidatedJson};
use crate::constants::routes;
use crate::errors::AppError;
use crate::models::Schedule;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Schedule routes handler
pub struct ScheduleRoutes;

impl ScheduleRoutes {
    /// Create all schedule routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::SCHEDULE,
                get(Self::handle_list)
                    .post(Self::handle_create)
                    .put(Self::handle_update),
            )
            .route(
                routes::SCHEDULE_BY_ID,
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /api/schedule
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(schedule): ValidatedJson<Schedule>,
    ) -> Result<Response, AppError> {
        let created = resources.schedules.create(schedule).await?;
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    /// Handle GET /api/schedule/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        IdPath(id): IdPath,
    ) -> Result<Response, AppError> {
        let schedule = resources.schedules.get_by_id(id).await?;
        Ok((StatusCode::OK, Json(schedule)).into_response())
    }

    /// Handle GET /api/schedule
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let schedules = resources.schedules.get_all().await?;
        Ok((StatusCode::OK, Json(schedules)).into_response())
    }

    /// Handle PUT /api/schedule
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(schedule): ValidatedJson<Schedule>,
    ) -> Result<Response, AppError> {
        let updated = resources.schedules.update(schedule).await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    /// Handle DELETE /api/schedule/:id
    ///
    /// Answers 200 with an empty body, also when nothing was stored
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        IdPath(id): IdPath,
    ) -> Result<Response, AppError> {
        resources.schedules.delete_by_id(id).await?;
        Ok(StatusCode::OK.into_response())
    }
}
