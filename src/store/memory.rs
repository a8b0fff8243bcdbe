// SPDX-License-Identifier: MIT

//! In-memory achievement store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeSet;

use crate::error::AppError;
use crate::models::UserAchievementRecord;
use crate::store::AchievementStore;

/// DashMap-backed achievement store.
///
/// The merge runs under the map's entry lock, so concurrent unions for the
/// same user serialize and commute.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, UserAchievementRecord>,
    /// When set, all operations fail. Mirrors an unavailable backing store.
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for testing caller retry paths.
    pub fn new_offline() -> Self {
        Self {
            records: DashMap::new(),
            offline: true,
        }
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::Store(
                "Store not connected (offline mode)".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AchievementStore for MemoryStore {
    async fn get_achievement_record(
        &self,
        user_id: &str,
    ) -> Result<Option<UserAchievementRecord>, AppError> {
        self.check_online()?;
        Ok(self.records.get(user_id).map(|r| r.value().clone()))
    }

    async fn merge_union_achievements(
        &self,
        user_id: &str,
        newly_earned: &BTreeSet<String>,
        awarded_at: &str,
    ) -> Result<(), AppError> {
        self.check_online()?;

        let mut record = self.records.entry(user_id.to_string()).or_default();
        record.earned.extend(newly_earned.iter().cloned());
        record.last_award_at = awarded_at.to_string();

        tracing::debug!(
            user_id,
            added = newly_earned.len(),
            total = record.earned.len(),
            "Merged achievement set"
        );
        Ok(())
    }
}
