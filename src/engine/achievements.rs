// SPDX-License-Identifier: MIT

//! Achievement checking and awarding.

use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::achievements as achievement_catalog;
use crate::error::Result;
use crate::models::AggregateStats;
use crate::store::AchievementStore;
use crate::time_utils::format_utc_rfc3339;

/// Evaluates the achievement catalog and issues idempotent awards.
#[derive(Clone)]
pub struct AchievementChecker {
    store: Arc<dyn AchievementStore>,
}

impl AchievementChecker {
    pub fn new(store: Arc<dyn AchievementStore>) -> Self {
        Self { store }
    }

    /// All catalog achievements whose predicate holds for `stats`.
    /// Pure; no store interaction.
    pub fn qualifying(stats: &AggregateStats) -> BTreeSet<String> {
        achievement_catalog::CATALOG
            .iter()
            .filter(|a| a.qualifies(stats))
            .map(|a| a.id.to_string())
            .collect()
    }

    /// Check the catalog against `stats` and award anything new.
    ///
    /// Returns only the newly earned IDs. When nothing new qualifies, no
    /// write is issued at all. A failed store write surfaces to the caller,
    /// who may retry with the same inputs: the computation is side-effect
    /// free and the merge is idempotent, so naive retry is safe. No retry
    /// loop lives here.
    pub async fn check_and_award(
        &self,
        user_id: &str,
        stats: &AggregateStats,
    ) -> Result<BTreeSet<String>> {
        let earned = self
            .store
            .get_achievement_record(user_id)
            .await?
            .map(|r| r.earned)
            .unwrap_or_default();

        let newly_earned: BTreeSet<String> = Self::qualifying(stats)
            .into_iter()
            .filter(|id| !earned.contains(id))
            .collect();

        if newly_earned.is_empty() {
            tracing::debug!(user_id, "No new achievements");
            return Ok(newly_earned);
        }

        let awarded_at = format_utc_rfc3339(Utc::now());
        self.store
            .merge_union_achievements(user_id, &newly_earned, &awarded_at)
            .await?;

        tracing::info!(
            user_id,
            newly_earned = ?newly_earned,
            "Awarded achievements"
        );
        Ok(newly_earned)
    }
}
