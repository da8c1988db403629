// ABOUTME: Configuration module for the Training Planner server
// ABOUTME: Exposes the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{AuthConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig};
