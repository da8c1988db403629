// ABOUTME: Basic authentication guard for the API routes
// ABOUTME: Rejects requests without valid credentials and records the caller on the span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Require valid Basic credentials on every request passing through
///
/// # Errors
///
/// Returns a 401 `AppError` when credentials are missing or rejected
#[tracing::instrument(
    skip_all,
    fields(
        user = tracing::field::Empty,
        role = tracing::field::Empty,
        success = tracing::field::Empty,
    )
)]
pub async fn require_basic_auth(
    State(resources): State<Arc<ServerResources>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let user = match resources.authenticator.authenticate(header) {
        Ok(user) => user,
        Err(error) => {
            tracing::Span::current().record("success", false);
            return Err(error);
        }
    };

    tracing::Span::current()
        .record("user", user.username.as_str())
        .record("role", user.role)
        .record("success", true);

    Ok(next.run(request).await)
}
