// ABOUTME: Dependency container shared by every route handler
// ABOUTME: Wires repositories, services and the authenticator once at start-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::BasicAuthenticator;
use crate::config::environment::ServerConfig;
use crate::database::{
    Database, ScheduleRepository, ScheduleRepositoryImpl, WorkoutRepository, WorkoutRepositoryImpl,
};
use crate::services::{ScheduleService, WorkoutService};
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Built once by the server binary (or a test) and handed to the routers as
/// `Arc<ServerResources>` state.
#[derive(Clone)]
pub struct ServerResources {
    /// Workout business rules
    pub workouts: Arc<WorkoutService>,
    /// Schedule business rules
    pub schedules: Arc<ScheduleService>,
    /// Basic credential checker
    pub authenticator: Arc<BasicAuthenticator>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire repositories and services over an opened database
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let workout_repository: Arc<dyn WorkoutRepository> =
            Arc::new(WorkoutRepositoryImpl::new(database.clone()));
        let schedule_repository: Arc<dyn ScheduleRepository> =
            Arc::new(ScheduleRepositoryImpl::new(database));

        let workouts = Arc::new(WorkoutService::new(workout_repository.clone()));
        let schedules = Arc::new(ScheduleService::new(schedule_repository, workout_repository));

        Self {
            workouts,
            schedules,
            authenticator: Arc::new(BasicAuthenticator::from_config(&config.auth)),
            config: Arc::new(config),
        }
    }
}
