// ABOUTME: Server binary for the Training Planner API
// ABOUTME: Loads configuration, opens the database and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Planner Server Binary

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use training_planner::{
    config::environment::ServerConfig, database::Database, logging, resources::ServerResources,
    routes::build_router, shutdown,
};

#[derive(Parser)]
#[command(name = "training-planner-server")]
#[command(about = "Training Planner API - workouts and training schedules over REST")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env().inspect_err(|e| {
        error!("Failed to load configuration: {:#}", e);
    })?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    info!("Starting Training Planner API");
    info!("{}", config.summary());

    if let Some(parent) = config
        .database
        .file_path()
        .and_then(|path| path.parent().map(std::path::Path::to_path_buf))
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(&parent)
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }

    let database = Database::new(&config.database.url, config.database.max_connections).await?;
    info!("Database initialized successfully");

    let addr = config.bind_address()?;
    let router = build_router(Arc::new(ServerResources::new(database, config)));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::wait_for_shutdown())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shut down cleanly");
    Ok(())
}
