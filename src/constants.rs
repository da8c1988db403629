// ABOUTME: System-wide constants and configuration defaults for the Training Planner API
// ABOUTME: Groups service names, environment defaults, auth settings and validation messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants grouped by domain. Values that can be overridden at
//! runtime are read by [`crate::config::environment::ServerConfig`]; the
//! defaults live here.

/// Service identification used in logs and health responses
pub mod service_names {
    /// Canonical service name
    pub const TRAINING_PLANNER: &str = "training-planner";
}

/// Default values for environment configuration
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/training_planner.db";
    /// Default connection pool size for file-backed databases
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Default allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// HTTP Basic authentication settings
pub mod auth {
    /// Realm advertised in `WWW-Authenticate` challenges
    pub const BASIC_REALM: &str = "training-planner";
    /// Default account name
    pub const DEFAULT_USERNAME: &str = "tsse";
    /// Default account password
    pub const DEFAULT_PASSWORD: &str = "sport";
    /// The single static role granted to the account
    pub const USER_ROLE: &str = "USER";
}

/// API route paths
pub mod routes {
    /// Schedule collection path
    pub const SCHEDULE: &str = "/api/schedule";
    /// Single schedule path
    pub const SCHEDULE_BY_ID: &str = "/api/schedule/:id";
    /// Workout collection path
    pub const WORKOUTS: &str = "/api/workouts";
    /// Single workout path
    pub const WORKOUT_BY_ID: &str = "/api/workouts/:id";
    /// Health check path
    pub const HEALTH: &str = "/health";
}

/// Validation messages reported back to clients
pub mod validation {
    /// Empty schedule name
    pub const SCHEDULE_NAME_EMPTY: &str = "Schedule name cannot be empty!";
    /// Schedule frequency below one
    pub const SCHEDULE_TRAININGS_PER_WEEK: &str = "Schedule needs at least one training per week!";
    /// Empty workout name
    pub const WORKOUT_NAME_EMPTY: &str = "Workout name cannot be empty!";
    /// Empty exercise name
    pub const EXERCISE_NAME_EMPTY: &str = "Exercise name cannot be empty!";
    /// Minimum schedule frequency
    pub const MIN_TRAININGS_PER_WEEK: i32 = 1;
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
