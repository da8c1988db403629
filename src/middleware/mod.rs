// ABOUTME: HTTP middleware for authentication, CORS and request tracing
// ABOUTME: Layers applied around the API router by the route builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod auth;
pub mod cors;
pub mod tracing;

// Authentication middleware
pub use auth::require_basic_auth;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use tracing::{apply_http_layers, RequestIdGenerator};
