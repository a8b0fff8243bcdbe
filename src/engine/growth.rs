// SPDX-License-Identifier: MIT

//! Day- and week-bucketed distance totals for progressive growth rules.
//!
//! Buckets with no activity inside the covered span are materialized as zero,
//! not omitted, so growth comparisons stay well-defined across gaps: a rest
//! day counts as zero distance, not as "no data".

use chrono::{Datelike, Duration, NaiveDate};
use chrono_tz::Tz;
use std::collections::BTreeMap;

use crate::models::ActivitySnapshot;

/// ISO week key: (ISO year, ISO week number).
pub type WeekKey = (i32, u32);

fn week_key(date: NaiveDate) -> WeekKey {
    let week = date.iso_week();
    (week.year(), week.week())
}

/// Read-only daily/weekly distance totals for one scope.
#[derive(Debug, Clone, Default)]
pub struct GrowthTracker {
    daily_km: BTreeMap<NaiveDate, f64>,
    weekly_km: BTreeMap<WeekKey, f64>,
}

impl GrowthTracker {
    /// Build a tracker from a snapshot history, bucketing by calendar date
    /// in the event timezone. Only valid activities contribute.
    pub fn from_snapshots(snapshots: &[ActivitySnapshot], tz: Tz) -> Self {
        let mut daily_km: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for snapshot in snapshots.iter().filter(|s| s.valid) {
            *daily_km.entry(snapshot.local_date(tz)).or_insert(0.0) += snapshot.distance_km();
        }

        // Fill the span between the first and last active day with zeroes.
        let span = daily_km
            .keys()
            .next()
            .copied()
            .zip(daily_km.keys().next_back().copied());
        if let Some((first, last)) = span {
            let mut day = first;
            while day < last {
                daily_km.entry(day).or_insert(0.0);
                match day.succ_opt() {
                    Some(next) => day = next,
                    None => break,
                }
            }
        }

        // Weekly totals derive from the zero-filled daily buckets, so empty
        // weeks inside the span are materialized too.
        let mut weekly_km: BTreeMap<WeekKey, f64> = BTreeMap::new();
        for (&day, &km) in &daily_km {
            *weekly_km.entry(week_key(day)).or_insert(0.0) += km;
        }

        Self {
            daily_km,
            weekly_km,
        }
    }

    /// Total distance (km) for a calendar date. Dates outside the covered
    /// span read as zero.
    pub fn daily_total(&self, date: NaiveDate) -> f64 {
        self.daily_km.get(&date).copied().unwrap_or(0.0)
    }

    /// Total distance (km) for an ISO week.
    pub fn weekly_total(&self, week: WeekKey) -> f64 {
        self.weekly_km.get(&week).copied().unwrap_or(0.0)
    }

    /// Day-over-day distance delta for `today` (km).
    pub fn daily_increase(&self, today: NaiveDate) -> f64 {
        let yesterday = match today.pred_opt() {
            Some(d) => d,
            None => return self.daily_total(today),
        };
        self.daily_total(today) - self.daily_total(yesterday)
    }

    /// Week-over-week growth for the week containing `today`, in percent.
    ///
    /// `None` when the preceding week's total is zero: the comparison is
    /// undefined and the caller must fail closed rather than divide by zero.
    pub fn weekly_growth_percent(&self, today: NaiveDate) -> Option<f64> {
        let this_week = self.weekly_total(week_key(today));
        let last_week = self.weekly_total(week_key(today - Duration::days(7)));

        if last_week <= 0.0 {
            return None;
        }
        Some((this_week - last_week) / last_week * 100.0)
    }
}
