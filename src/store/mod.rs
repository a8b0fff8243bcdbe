// SPDX-License-Identifier: MIT

//! External-store collaborator boundary.
//!
//! The engine never persists anything itself; it reads achievement records
//! and issues merge-union writes through this trait. Implementations must
//! make the merge atomic and commutative (a set union), so concurrent
//! awarders converge with no lost updates.

pub mod memory;

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::error::AppError;
use crate::models::UserAchievementRecord;

/// Achievement record storage operations.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Read a user's current achievement record.
    async fn get_achievement_record(
        &self,
        user_id: &str,
    ) -> Result<Option<UserAchievementRecord>, AppError>;

    /// Add `newly_earned` to the user's stored set and stamp the award time.
    ///
    /// Idempotent: applying the same set twice leaves the record unchanged
    /// except for the timestamp.
    async fn merge_union_achievements(
        &self,
        user_id: &str,
        newly_earned: &BTreeSet<String>,
        awarded_at: &str,
    ) -> Result<(), AppError>;
}

pub use memory::MemoryStore;
