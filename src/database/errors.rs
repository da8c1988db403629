// ABOUTME: Structured error types for database operations
// ABOUTME: Provides storage-specific errors with context, converted to AppError at the service edge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Pool could not be created or a connection could not be opened
    #[error("Database connection failed: {context}")]
    ConnectionFailed {
        /// What was being connected to
        context: String,
    },

    /// Schema creation failed at start-up
    #[error("Database migration failed: {context}")]
    MigrationFailed {
        /// Which migration step failed
        context: String,
    },

    /// A statement failed while serving a request
    #[error("Database query failed: {context}")]
    QueryError {
        /// Driver error text
        context: String,
    },
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        Self::QueryError {
            context: error.to_string(),
        }
    }
}
