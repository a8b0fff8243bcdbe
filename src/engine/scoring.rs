// SPDX-License-Identifier: MIT

//! Rule evaluation and score aggregation.
//!
//! Both are pure functions of (rule set, stats, history, context), so
//! re-scoring is always reproducible and safe to re-run. No hidden state.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use crate::engine::growth::GrowthTracker;
use crate::error::AppError;
use crate::models::{ActivityHistory, AggregateStats, RuleDefinition};

/// Base points contributed by each passing rule before multipliers.
pub const BASE_RULE_POINTS: f64 = 10.0;

/// Evaluation context for one scoring pass.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    /// The event's configured timezone. All calendar matching happens here,
    /// never in the evaluator's local time.
    pub timezone: Tz,
    /// The calendar date being scored (in the event timezone).
    pub date: NaiveDate,
}

/// Outcome of evaluating a single rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    pub rule_type: &'static str,
    pub passed: bool,
    /// Multiplicative contribution; 1 for every rule except a matching
    /// date multiplier.
    pub score_factor: f64,
}

/// A rule excluded from scoring due to a configuration error.
#[derive(Debug, Clone, Serialize)]
pub struct ExcludedRule {
    /// Position in the event's rule list
    pub index: usize,
    pub rule_type: &'static str,
    pub reason: String,
}

/// Result of one scoring pass.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub outcomes: Vec<RuleOutcome>,
    pub excluded: Vec<ExcludedRule>,
}

/// Evaluate one rule against a user's stats and history.
///
/// A rule whose parameters fail schema validation yields
/// [`AppError::RuleConfig`] instead of crashing or silently passing.
pub fn evaluate(
    rule: &RuleDefinition,
    stats: &AggregateStats,
    history: &ActivityHistory,
    ctx: &ScoringContext,
) -> Result<RuleOutcome, AppError> {
    rule.validate_params()
        .map_err(|e| AppError::RuleConfig(format!("{}: {}", rule.rule_type(), e)))?;

    let rule_type = rule.rule_type();
    let outcome = match rule {
        RuleDefinition::MinDistance(p) => RuleOutcome {
            rule_type,
            // Boundary equality passes.
            passed: stats.total_distance_km >= p.value,
            score_factor: 1.0,
        },
        RuleDefinition::DateMultiplier(p) => {
            let matched = p.dates.contains(&ctx.date);
            RuleOutcome {
                rule_type,
                passed: matched,
                score_factor: if matched { p.multiplier } else { 1.0 },
            }
        }
        RuleDefinition::DailyGrowth(p) => {
            let tracker = GrowthTracker::from_snapshots(history.for_scope(p.scope), ctx.timezone);
            RuleOutcome {
                rule_type,
                passed: tracker.daily_increase(ctx.date) >= p.min_increase,
                score_factor: 1.0,
            }
        }
        RuleDefinition::WeeklyGrowthPercent(p) => {
            let tracker = GrowthTracker::from_snapshots(history.for_scope(p.scope), ctx.timezone);
            let passed = match tracker.weekly_growth_percent(ctx.date) {
                Some(growth) => growth >= p.min_percent,
                None => {
                    // Zero prior-week baseline: undefined comparison, fail
                    // closed rather than divide by zero.
                    tracing::debug!(
                        date = %ctx.date,
                        "Weekly growth undefined: prior week total is zero"
                    );
                    false
                }
            };
            RuleOutcome {
                rule_type,
                passed,
                score_factor: 1.0,
            }
        }
    };

    Ok(outcome)
}

/// Combine all rule outcomes for one user into a single score.
///
/// Rules are walked in catalog declaration order — the documented tie-break
/// for multiplier composition. Each passing rule adds the base unit score,
/// then multiplies the running total by its factor. Failed outcomes
/// contribute nothing; malformed rules are excluded and reported, never
/// aborting the pass.
pub fn compute_score(
    rules: &[RuleDefinition],
    stats: &AggregateStats,
    history: &ActivityHistory,
    ctx: &ScoringContext,
) -> ScoreBreakdown {
    let mut total = 0.0;
    let mut outcomes = Vec::with_capacity(rules.len());
    let mut excluded = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        match evaluate(rule, stats, history, ctx) {
            Ok(outcome) => {
                if outcome.passed {
                    total += BASE_RULE_POINTS;
                    total *= outcome.score_factor;
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                tracing::warn!(
                    index,
                    rule_type = rule.rule_type(),
                    error = %e,
                    "Excluding malformed rule from scoring"
                );
                excluded.push(ExcludedRule {
                    index,
                    rule_type: rule.rule_type(),
                    reason: e.to_string(),
                });
            }
        }
    }

    ScoreBreakdown {
        total,
        outcomes,
        excluded,
    }
}
