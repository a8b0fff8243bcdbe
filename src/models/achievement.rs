// SPDX-License-Identifier: MIT

//! Achievement models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::AggregateStats;

/// A catalog achievement: id, display metadata, and a pure predicate over
/// aggregate statistics. The catalog is fixed and process-wide; adding an
/// achievement means adding a catalog entry, never a new code path.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub predicate: fn(&AggregateStats) -> bool,
}

impl AchievementDefinition {
    pub fn qualifies(&self, stats: &AggregateStats) -> bool {
        (self.predicate)(stats)
    }
}

/// The set of achievements a user has earned, owned by the external store.
///
/// Grows monotonically: an achievement, once earned, is never revoked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAchievementRecord {
    /// Earned achievement IDs
    #[serde(default)]
    pub earned: BTreeSet<String>,
    /// Timestamp of the most recent award (RFC3339)
    #[serde(default)]
    pub last_award_at: String,
}
