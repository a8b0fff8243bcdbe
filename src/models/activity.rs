// SPDX-License-Identifier: MIT

//! Activity snapshot model.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::rule::Scope;

/// One recorded activity for a member. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    /// Distance in meters (non-negative)
    pub distance_meters: f64,
    /// Duration in seconds (positive)
    pub duration_seconds: u32,
    /// Elevation gain in meters (non-negative)
    pub elevation_gain_meters: f64,
    /// Start date/time (UTC)
    pub start_date: DateTime<Utc>,
    /// Set by the external validation collaborator. Invalid activities are
    /// excluded from all rule evaluation and aggregate statistics.
    pub valid: bool,
}

impl ActivitySnapshot {
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Pace in seconds per kilometer, derived from duration and distance.
    /// `None` for zero-distance activities.
    pub fn pace_seconds_per_km(&self) -> Option<f64> {
        let km = self.distance_km();
        if km > 0.0 {
            Some(f64::from(self.duration_seconds) / km)
        } else {
            None
        }
    }

    /// Calendar date of the activity in the event's timezone.
    pub fn local_date(&self, tz: Tz) -> NaiveDate {
        self.start_date.with_timezone(&tz).date_naive()
    }
}

/// Read-only activity history for one user, as fetched by the external
/// history collaborator. The `team` vector holds the merged snapshots of
/// all members of the user's team (including the user's own).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityHistory {
    #[serde(default)]
    pub individual: Vec<ActivitySnapshot>,
    #[serde(default)]
    pub team: Vec<ActivitySnapshot>,
}

impl ActivityHistory {
    /// Snapshots for a growth-rule scope.
    pub fn for_scope(&self, scope: Scope) -> &[ActivitySnapshot] {
        match scope {
            Scope::Individual => &self.individual,
            Scope::Team => &self.team,
        }
    }
}
