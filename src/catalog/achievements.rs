// SPDX-License-Identifier: MIT

//! The fixed, process-wide achievement catalog.
//!
//! Achievements are data: an id, display metadata, and a pure predicate over
//! aggregate statistics. Adding one is a new entry in [`CATALOG`].

use crate::models::AchievementDefinition;

/// All defined achievements, in registry order.
pub static CATALOG: &[AchievementDefinition] = &[
    AchievementDefinition {
        id: "distance_100",
        name: "Century Club",
        description: "Run a total of 100 kilometers",
        predicate: |stats| stats.total_distance_km >= 100.0,
    },
    AchievementDefinition {
        id: "ten_activities",
        name: "Regular Runner",
        description: "Complete 10 valid activities",
        predicate: |stats| stats.valid_activities >= 10,
    },
    AchievementDefinition {
        id: "speed_demon",
        name: "Speed Demon",
        description: "Hold an average pace under 5:00 min/km",
        // Average pace is 0 with no recorded distance, so an empty history
        // must not qualify.
        predicate: |stats| {
            stats.valid_activities > 0 && stats.average_pace_seconds_per_km < 300.0
        },
    },
    AchievementDefinition {
        id: "climber",
        name: "Climber",
        description: "Gain 1000 meters of total elevation",
        predicate: |stats| stats.total_elevation_meters >= 1000.0,
    },
];

/// Look up an achievement by id.
pub fn find(id: &str) -> Option<&'static AchievementDefinition> {
    CATALOG.iter().find(|a| a.id == id)
}
