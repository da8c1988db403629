// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds the full application router over an in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]

use anyhow::Result;
use axum::Router;
use std::sync::{Arc, Once};
use training_planner::{
    config::environment::{DatabaseConfig, ServerConfig},
    database::Database,
    resources::ServerResources,
    routes::build_router,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration pointing at a private in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        },
        ..ServerConfig::default()
    }
}

/// Standard test resources over a fresh in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let config = test_config();
    let database = Database::new(&config.database.url, config.database.max_connections).await?;
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// Full application router over a fresh in-memory database
pub async fn create_test_app() -> Router {
    let resources = create_test_server_resources()
        .await
        .expect("Failed to create test resources");
    build_router(resources)
}
