// SPDX-License-Identifier: MIT

//! Runclub-Engine: rule-driven scoring and achievements for running-club events
//!
//! This crate provides the scoring core for a running-club event platform:
//! it evaluates declarative scoring rules against member activity history
//! and awards achievements based on aggregate statistics.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use catalog::EventCatalog;
use config::Config;
use engine::AchievementChecker;
use store::AchievementStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub events: EventCatalog,
    pub store: Arc<dyn AchievementStore>,
    pub checker: AchievementChecker,
}
