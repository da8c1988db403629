// ABOUTME: Main library entry point for the Training Planner API
// ABOUTME: REST backend for workouts, exercises and weekly training schedules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Training Planner API
//!
//! A REST backend exposing CRUD endpoints for workouts (composed of
//! exercises) and schedules (ordered references to workouts), guarded by
//! HTTP Basic authentication and persisted in `SQLite`.
//!
//! ## Architecture
//!
//! - **Models**: entities with explicit field validation
//! - **Database**: `SQLite` managers behind repository traits
//! - **Services**: existence and duplicate rules on top of the repositories
//! - **Routes**: thin axum handlers mapping service results to HTTP
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use training_planner::config::environment::ServerConfig;
//! use training_planner::database::Database;
//! use training_planner::resources::ServerResources;
//! use training_planner::routes::build_router;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database.url, config.database.max_connections).await?;
//!     let router = build_router(Arc::new(ServerResources::new(database, config)));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8081").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

/// HTTP Basic credential checking
pub mod auth;

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// `SQLite` storage and repository traits
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain entities and validation
pub mod models;

/// Shared dependency container
pub mod resources;

/// HTTP routes
pub mod routes;

/// Business rules per entity kind
pub mod services;

/// Graceful shutdown signals
pub mod shutdown;
