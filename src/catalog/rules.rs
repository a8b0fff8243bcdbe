// SPDX-License-Identifier: MIT

//! Event rule catalog loading and validation.

use chrono_tz::Tz;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::RuleDefinition;

/// Raw per-event entry as it appears in the catalog file.
#[derive(Debug, Deserialize)]
struct RawEventEntry {
    /// IANA timezone name, e.g. "America/Los_Angeles"
    timezone: String,
    /// Rules in declaration order. Order is the documented tie-break for
    /// multiplier composition and must be preserved.
    rules: Vec<RuleDefinition>,
}

/// A validated event configuration.
#[derive(Debug, Clone)]
pub struct EventEntry {
    pub timezone: Tz,
    pub rules: Vec<RuleDefinition>,
}

/// Catalog of per-event rule sets, loaded once at startup.
#[derive(Debug, Default, Clone)]
pub struct EventCatalog {
    events: HashMap<String, EventEntry>,
}

impl EventCatalog {
    /// Load the catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON string.
    ///
    /// Every rule is validated against its schema here, so a malformed rule
    /// is rejected at startup instead of failing mid-evaluation.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, RawEventEntry> = serde_json::from_str(json_data)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut events = HashMap::new();

        for (event_id, entry) in raw {
            let timezone: Tz = entry
                .timezone
                .parse()
                .map_err(|_| CatalogError::UnknownTimezone {
                    event: event_id.clone(),
                    timezone: entry.timezone.clone(),
                })?;

            for (index, rule) in entry.rules.iter().enumerate() {
                rule.validate_params()
                    .map_err(|e| CatalogError::InvalidRule {
                        event: event_id.clone(),
                        index,
                        rule_type: rule.rule_type(),
                        message: e.to_string(),
                    })?;
            }

            events.insert(
                event_id,
                EventEntry {
                    timezone,
                    rules: entry.rules,
                },
            );
        }

        tracing::info!(count = events.len(), "Loaded event rule catalog");
        Ok(Self { events })
    }

    /// Look up a full event entry.
    pub fn event(&self, event_id: &str) -> Option<&EventEntry> {
        self.events.get(event_id)
    }

    /// Rules for an event, in declaration order.
    pub fn rules_for(&self, event_id: &str) -> Option<&[RuleDefinition]> {
        self.events.get(event_id).map(|e| e.rules.as_slice())
    }

    /// Configured timezone for an event.
    pub fn timezone_for(&self, event_id: &str) -> Option<Tz> {
        self.events.get(event_id).map(|e| e.timezone)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Event '{event}' has unknown timezone '{timezone}'")]
    UnknownTimezone { event: String, timezone: String },

    #[error("Event '{event}' rule {index} ({rule_type}) is invalid: {message}")]
    InvalidRule {
        event: String,
        index: usize,
        rule_type: &'static str,
        message: String,
    },
}
