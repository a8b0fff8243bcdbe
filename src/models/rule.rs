// SPDX-License-Identifier: MIT

//! Scoring rule definitions.
//!
//! Rules are event-owned configuration, immutable during a scoring period.
//! The wire tags (`min_distance`, `date_multiplier`, `daily_growth`,
//! `weekly_growth_percent`) and parameter field names are part of the
//! persisted config contract and must not change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Whether a growth comparison is computed per individual or summed per team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Individual,
    Team,
}

/// Parameters for the `min_distance` rule.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MinDistanceParams {
    /// Minimum total distance in kilometers
    #[validate(range(min = 0.0))]
    pub value: f64,
}

/// Parameters for the `date_multiplier` rule.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DateMultiplierParams {
    /// Explicit set of calendar dates (event timezone), not a range
    #[validate(length(min = 1))]
    pub dates: Vec<NaiveDate>,
    /// Score multiplier applied on matching dates
    #[validate(range(min = 2.0, max = 10.0))]
    pub multiplier: f64,
}

/// Parameters for the `daily_growth` rule.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DailyGrowthParams {
    /// Required day-over-day distance increase in kilometers
    #[validate(range(min = 0.0))]
    pub min_increase: f64,
    #[serde(default)]
    pub scope: Scope,
}

/// Parameters for the `weekly_growth_percent` rule.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGrowthParams {
    /// Required week-over-week distance growth, in percent
    #[validate(range(exclusive_min = 0.0))]
    pub min_percent: f64,
    #[serde(default)]
    pub scope: Scope,
}

/// A configured scoring rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleDefinition {
    MinDistance(MinDistanceParams),
    DateMultiplier(DateMultiplierParams),
    DailyGrowth(DailyGrowthParams),
    WeeklyGrowthPercent(WeeklyGrowthParams),
}

impl RuleDefinition {
    /// Wire identifier of the rule type.
    pub fn rule_type(&self) -> &'static str {
        match self {
            RuleDefinition::MinDistance(_) => "min_distance",
            RuleDefinition::DateMultiplier(_) => "date_multiplier",
            RuleDefinition::DailyGrowth(_) => "daily_growth",
            RuleDefinition::WeeklyGrowthPercent(_) => "weekly_growth_percent",
        }
    }

    /// Validate parameters against the rule's schema bounds.
    ///
    /// Field presence and types are enforced by serde at deserialization;
    /// this covers the numeric bounds and non-empty constraints.
    pub fn validate_params(&self) -> Result<(), ValidationErrors> {
        match self {
            RuleDefinition::MinDistance(p) => p.validate(),
            RuleDefinition::DateMultiplier(p) => p.validate(),
            RuleDefinition::DailyGrowth(p) => p.validate(),
            RuleDefinition::WeeklyGrowthPercent(p) => p.validate(),
        }
    }
}
