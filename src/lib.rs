// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GreenNexus: track eco-friendly activities and their carbon savings
//!
//! This crate provides the backend API for logging activities and computing
//! the green score, monthly carbon trend and weekly statistics shown on the
//! dashboard.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemoryDb;
use services::ActivityService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryDb,
    pub activity_service: ActivityService,
}

impl AppState {
    pub fn new(config: Config, db: MemoryDb) -> Self {
        let activity_service = ActivityService::new(db.clone());
        Self {
            config,
            db,
            activity_service,
        }
    }
}
