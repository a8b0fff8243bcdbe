// SPDX-License-Identifier: MIT

//! Data models for the scoring engine.

pub mod achievement;
pub mod activity;
pub mod rule;
pub mod stats;

pub use achievement::{AchievementDefinition, UserAchievementRecord};
pub use activity::{ActivityHistory, ActivitySnapshot};
pub use rule::{RuleDefinition, Scope};
pub use stats::AggregateStats;
