// SPDX-License-Identifier: MIT

//! Scoring and achievement API routes.
//!
//! The engine assumes synchronous, already-fetched inputs: callers submit the
//! activity history they fetched from the history collaborator, and every
//! response is computed from that request alone.

use crate::catalog::achievements as achievement_catalog;
use crate::engine::{self, ScoringContext};
use crate::error::Result;
use crate::models::{ActivityHistory, AggregateStats, UserAchievementRecord};
use crate::time_utils::today_in_tz;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/achievements", get(list_achievements))
        .route("/api/users/{user_id}/achievements", get(get_user_achievements))
        .route(
            "/api/users/{user_id}/achievements/check",
            post(check_achievements),
        )
        .route("/api/score", post(compute_score))
}

// ─── Achievement Catalog ─────────────────────────────────────

/// Catalog entry metadata (predicates stay server-side).
#[derive(Serialize)]
pub struct AchievementSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// List the achievement catalog.
async fn list_achievements() -> Json<Vec<AchievementSummary>> {
    let achievements = achievement_catalog::CATALOG
        .iter()
        .map(|a| AchievementSummary {
            id: a.id,
            name: a.name,
            description: a.description,
        })
        .collect();
    Json(achievements)
}

// ─── User Achievements ───────────────────────────────────────

/// Get a user's earned achievements.
///
/// Users with no record yet get an empty one; there is no separate user
/// registry to consult.
async fn get_user_achievements(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserAchievementRecord>> {
    let record = state
        .store
        .get_achievement_record(&user_id)
        .await?
        .unwrap_or_default();
    Ok(Json(record))
}

#[derive(Deserialize)]
pub struct CheckRequest {
    pub history: ActivityHistory,
}

#[derive(Serialize)]
pub struct CheckResponse {
    /// Achievements earned by this call only
    pub newly_earned: BTreeSet<String>,
    /// Full earned set after the check
    pub earned: BTreeSet<String>,
    /// The aggregate stats the check ran against
    pub stats: AggregateStats,
}

/// Rebuild aggregate stats from the submitted history and award anything
/// newly qualifying. Safe to re-run: awarding is idempotent.
async fn check_achievements(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>> {
    let stats = AggregateStats::from_history(&request.history.individual);

    let newly_earned = state.checker.check_and_award(&user_id, &stats).await?;

    let earned = state
        .store
        .get_achievement_record(&user_id)
        .await?
        .map(|r| r.earned)
        .unwrap_or_default();

    Ok(Json(CheckResponse {
        newly_earned,
        earned,
        stats,
    }))
}

// ─── Scoring ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub user_id: String,
    pub event_id: String,
    /// Calendar date to score (event timezone). Defaults to today.
    pub date: Option<NaiveDate>,
    pub history: ActivityHistory,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub user_id: String,
    pub event_id: String,
    /// The date the pass was scored for (event timezone)
    pub date: NaiveDate,
    pub total: f64,
    pub outcomes: Vec<engine::RuleOutcome>,
    pub excluded: Vec<engine::ExcludedRule>,
    pub stats: AggregateStats,
}

/// Run one scoring pass for a user against an event's rule set.
async fn compute_score(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>> {
    let event = state.events.event(&request.event_id).ok_or_else(|| {
        crate::error::AppError::NotFound(format!("Event {} not found", request.event_id))
    })?;

    let date = request.date.unwrap_or_else(|| today_in_tz(event.timezone));
    let ctx = ScoringContext {
        timezone: event.timezone,
        date,
    };

    tracing::debug!(
        user_id = %request.user_id,
        event_id = %request.event_id,
        date = %date,
        rules = event.rules.len(),
        "Scoring pass"
    );

    let mut stats = AggregateStats::from_history(&request.history.individual);
    let breakdown = engine::compute_score(&event.rules, &stats, &request.history, &ctx);
    stats.current_score = breakdown.total;

    Ok(Json(ScoreResponse {
        user_id: request.user_id,
        event_id: request.event_id,
        date,
        total: breakdown.total,
        outcomes: breakdown.outcomes,
        excluded: breakdown.excluded,
        stats,
    }))
}
