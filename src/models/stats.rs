// SPDX-License-Identifier: MIT

//! Aggregate statistics, rebuilt from the snapshot set on every pass.
//!
//! Aggregates are never hand-edited or mutated incrementally; recomputing
//! from scratch keeps re-scoring reproducible and makes every evaluation
//! safe to re-run.

use serde::{Deserialize, Serialize};

use crate::models::ActivitySnapshot;

/// Per-user aggregate statistics over valid activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Total distance in kilometers
    #[serde(default)]
    pub total_distance_km: f64,
    /// Number of valid activities
    #[serde(default)]
    pub valid_activities: u32,
    /// Distance-weighted average pace (seconds per km); 0 when no distance
    #[serde(default)]
    pub average_pace_seconds_per_km: f64,
    /// Total elevation gain in meters
    #[serde(default)]
    pub total_elevation_meters: f64,
    /// Score from the most recent scoring pass
    #[serde(default)]
    pub current_score: f64,
}

impl AggregateStats {
    /// Rebuild aggregates from an activity history.
    ///
    /// Invalid snapshots are excluded entirely.
    pub fn from_history(snapshots: &[ActivitySnapshot]) -> Self {
        let mut total_km = 0.0;
        let mut total_seconds = 0.0;
        let mut total_elevation = 0.0;
        let mut count = 0u32;

        for snapshot in snapshots.iter().filter(|s| s.valid) {
            total_km += snapshot.distance_km();
            total_seconds += f64::from(snapshot.duration_seconds);
            total_elevation += snapshot.elevation_gain_meters;
            count += 1;
        }

        let average_pace = if total_km > 0.0 {
            total_seconds / total_km
        } else {
            0.0
        };

        Self {
            total_distance_km: total_km,
            valid_activities: count,
            average_pace_seconds_per_km: average_pace,
            total_elevation_meters: total_elevation,
            current_score: 0.0,
        }
    }
}
