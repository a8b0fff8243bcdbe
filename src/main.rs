// SPDX-License-Identifier: MIT

//! Runclub-Engine API Server
//!
//! Computes participation scores and unlocks achievements for members of a
//! running-club event platform, driven by per-event rule catalogs.

use runclub_engine::{
    catalog::EventCatalog, config::Config, engine::AchievementChecker, store::MemoryStore,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Runclub-Engine API");

    // Load per-event rule catalogs
    tracing::info!(path = %config.event_catalog_path, "Loading event rule catalog");
    let events = EventCatalog::load_from_file(&config.event_catalog_path)
        .expect("Failed to load event rule catalog");
    tracing::info!(count = events.len(), "Event rule catalog loaded");

    // Achievement store and checker
    let store: Arc<dyn runclub_engine::store::AchievementStore> = Arc::new(MemoryStore::new());
    let checker = AchievementChecker::new(store.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        events,
        store,
        checker,
    });

    // Build router
    let app = runclub_engine::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("runclub_engine=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
