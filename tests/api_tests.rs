// SPDX-License-Identifier: MIT

//! HTTP round-trips through the router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Two runs: 5 km the day before the multiplier date, 8 km on it.
fn sample_history() -> Value {
    json!({
        "individual": [
            {
                "distance_meters": 5000.0,
                "duration_seconds": 1500,
                "elevation_gain_meters": 40.0,
                "start_date": "2026-04-03T09:00:00Z",
                "valid": true
            },
            {
                "distance_meters": 8000.0,
                "duration_seconds": 2400,
                "elevation_gain_meters": 60.0,
                "start_date": "2026-04-04T09:00:00Z",
                "valid": true
            }
        ],
        "team": []
    })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_score_pass_applies_rules_in_order() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/score",
            json!({
                "user_id": "runner-1",
                "event_id": "test-event",
                "date": "2026-04-04",
                "history": sample_history()
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    // min_distance (13 km >= 5): +10 -> 10
    // date_multiplier (2026-04-04 matches, x2): +10 -> 20, x2 -> 40
    // daily_growth (5 -> 8 km, minIncrease 2): +10 -> 50
    assert_eq!(body["total"], 50.0);
    assert_eq!(body["stats"]["total_distance_km"], 13.0);
    assert_eq!(body["stats"]["current_score"], 50.0);
    assert_eq!(body["outcomes"].as_array().unwrap().len(), 3);
    assert_eq!(body["excluded"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_score_outside_multiplier_dates() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/score",
            json!({
                "user_id": "runner-1",
                "event_id": "test-event",
                "date": "2026-04-05",
                "history": sample_history()
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    // Only min_distance passes: daily growth on the 5th is 0 - 8 km.
    assert_eq!(body["total"], 10.0);
    let multiplier_outcome = &body["outcomes"][1];
    assert_eq!(multiplier_outcome["rule_type"], "date_multiplier");
    assert_eq!(multiplier_outcome["passed"], false);
    assert_eq!(multiplier_outcome["score_factor"], 1.0);
}

#[tokio::test]
async fn test_score_unknown_event_is_404() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/score",
            json!({
                "user_id": "runner-1",
                "event_id": "no-such-event",
                "history": {"individual": [], "team": []}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_achievement_check_round_trip() {
    let (app, _state) = common::create_test_app();

    // 12 valid activities of 10 km / 2800 s / 100 m each: earns all four.
    let activities: Vec<Value> = (0..12)
        .map(|i| {
            json!({
                "distance_meters": 10000.0,
                "duration_seconds": 2800,
                "elevation_gain_meters": 100.0,
                "start_date": format!("2026-03-{:02}T09:00:00Z", i + 1),
                "valid": true
            })
        })
        .collect();
    let body = json!({"history": {"individual": activities, "team": []}});

    let response = app
        .clone()
        .oneshot(json_post("/api/users/runner-1/achievements/check", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = response_json(response).await;
    assert_eq!(first["newly_earned"].as_array().unwrap().len(), 4);
    assert_eq!(first["earned"].as_array().unwrap().len(), 4);

    // Idempotent: a second identical check awards nothing new.
    let response = app
        .clone()
        .oneshot(json_post("/api/users/runner-1/achievements/check", body))
        .await
        .unwrap();
    let second = response_json(response).await;
    assert_eq!(second["newly_earned"].as_array().unwrap().len(), 0);
    assert_eq!(second["earned"].as_array().unwrap().len(), 4);

    // And the stored record reflects the earned set.
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/runner-1/achievements")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let record = response_json(response).await;
    assert_eq!(record["earned"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_achievement_catalog_listing() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/achievements")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"distance_100"));
    assert!(ids.contains(&"ten_activities"));
    assert!(ids.contains(&"speed_demon"));
    assert!(ids.contains(&"climber"));
}

#[tokio::test]
async fn test_unknown_user_has_empty_record() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/nobody/achievements")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["earned"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_store_failure_maps_to_500() {
    let store = std::sync::Arc::new(runclub_engine::store::MemoryStore::new_offline());
    let (app, _state) = common::create_test_app_with_store(store);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/runner-1/achievements")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "store_error");
}
