// SPDX-License-Identifier: MIT

//! The scoring and achievement engine.
//!
//! Everything here is a pure function of its inputs except the achievement
//! checker's single merge-union write, which goes through the store
//! collaborator trait.

pub mod achievements;
pub mod growth;
pub mod scoring;

pub use achievements::AchievementChecker;
pub use growth::GrowthTracker;
pub use scoring::{
    compute_score, evaluate, ExcludedRule, RuleOutcome, ScoreBreakdown, ScoringContext,
    BASE_RULE_POINTS,
};
