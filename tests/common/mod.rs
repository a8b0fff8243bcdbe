// SPDX-License-Identifier: MIT

use runclub_engine::catalog::EventCatalog;
use runclub_engine::config::Config;
use runclub_engine::engine::AchievementChecker;
use runclub_engine::routes::create_router;
use runclub_engine::store::{AchievementStore, MemoryStore};
use runclub_engine::AppState;
use std::sync::Arc;

/// Event catalog used by the HTTP tests. Rules in declaration order:
/// bonus first, multiplier second.
#[allow(dead_code)]
pub const TEST_CATALOG: &str = r#"{
    "test-event": {
        "timezone": "UTC",
        "rules": [
            {"type": "min_distance", "value": 5.0},
            {"type": "date_multiplier", "dates": ["2026-04-04"], "multiplier": 2.0},
            {"type": "daily_growth", "minIncrease": 2.0, "scope": "individual"}
        ]
    }
}"#;

/// Create a test app backed by a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let store: Arc<dyn AchievementStore> = Arc::new(MemoryStore::new());
    create_test_app_with_store(store)
}

/// Create a test app over a caller-provided store.
#[allow(dead_code)]
pub fn create_test_app_with_store(
    store: Arc<dyn AchievementStore>,
) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let events = EventCatalog::load_from_json(TEST_CATALOG).expect("Failed to load test catalog");
    let checker = AchievementChecker::new(store.clone());

    let state = Arc::new(AppState {
        config,
        events,
        store,
        checker,
    });

    (create_router(state.clone()), state)
}
