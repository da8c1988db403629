// ABOUTME: Route module organization for the Training Planner HTTP endpoints
// ABOUTME: Assembles the public and authenticated routers and the shared HTTP layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the service layer. [`build_router`] combines them with the
//! authentication guard, CORS and request tracing.

/// Request extractors mapping rejections to API errors
pub mod extract;
/// Health check route
pub mod health;
/// Schedule CRUD routes
pub mod schedules;
/// Workout CRUD routes
pub mod workouts;

pub use health::HealthRoutes;
pub use schedules::ScheduleRoutes;
pub use workouts::WorkoutRoutes;

use crate::middleware::{apply_http_layers, require_basic_auth, setup_cors};
use crate::resources::ServerResources;
use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;

/// Build the complete application router
///
/// Everything under `/api` requires Basic credentials; `/health` is public.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(ScheduleRoutes::routes(resources.clone()))
        .merge(WorkoutRoutes::routes(resources.clone()))
        .route_layer(from_fn_with_state(resources.clone(), require_basic_auth));

    let router = Router::new()
        .merge(HealthRoutes::routes())
        .merge(api)
        .layer(setup_cors(&resources.config));

    apply_http_layers(router)
}
