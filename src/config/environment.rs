// ABOUTME: Environment configuration for the Training Planner server
// ABOUTME: Reads ports, database, credential and CORS settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{auth, defaults};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL; `sqlite::memory:` selects an in-memory database
    pub url: String,
    /// Pool size for file-backed databases
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Whether the URL points at an in-memory database
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:")
    }

    /// Filesystem location of a file-backed database
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.is_memory() {
            return None;
        }
        let path = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))
            .unwrap_or(&self.url);
        let path = path.split('?').next().unwrap_or(path);
        Some(PathBuf::from(path))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DATABASE_URL.to_owned(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
        }
    }
}

/// Credentials of the single API account
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: auth::DEFAULT_USERNAME.to_owned(),
            password: auth::DEFAULT_PASSWORD.to_owned(),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Basic auth account
    pub auth: AuthConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", defaults::HOST),
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", defaults::DATABASE_URL),
                max_connections: env_var_or(
                    "DATABASE_MAX_CONNECTIONS",
                    &defaults::DATABASE_MAX_CONNECTIONS.to_string(),
                )
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS value")?,
            },
            auth: AuthConfig {
                username: env_var_or("AUTH_USERNAME", auth::DEFAULT_USERNAME),
                password: env_var_or("AUTH_PASSWORD", auth::DEFAULT_PASSWORD),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", defaults::CORS_ALLOWED_ORIGINS),
            },
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "")),
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Socket address the HTTP server binds to
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not a valid IP address
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.http_port))
    }

    /// Log-safe configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Training Planner Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}:{}\n\
             - Database: {}\n\
             - Auth User: {} (password: [REDACTED])\n\
             - CORS Origins: {}",
            self.environment,
            self.host,
            self.http_port,
            if self.database.is_memory() {
                "SQLite (in-memory)".to_owned()
            } else {
                format!("SQLite ({})", self.database.url)
            },
            self.auth.username,
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
