// ABOUTME: Track summarization engine producing distance, activity, and classification summaries
// ABOUTME: Sorts defensively, partitions by local calendar day, and bins movement per hour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! Track summarization
//!
//! [`TrackAnalyzer::summarize`] converts an unordered collection of fixes into
//! a [`TrackSummary`] view model. The computation is a pure function of the
//! fixes plus the caller's `now`: concurrent invocations share no state and
//! the summary is recomputed per render, never persisted.

use chrono::{DateTime, TimeZone, Timelike};
use herdtrack_core::constants::HOURS_PER_DAY;
use herdtrack_core::models::Fix;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ActivityThresholds, AnalyticsConfig};
use crate::distance::planar_distance_scaled;

/// Coarse three-level classification of a day's movement volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    /// Barely moved today; worth a look at the animal
    Low,
    /// Moving, but less than a healthy grazing day
    Weak,
    /// Normal grazing activity
    Normal,
}

impl ActivityState {
    /// Classify a day's total distance against the configured thresholds
    #[must_use]
    pub fn from_daily_distance(distance_meters: f64, thresholds: &ActivityThresholds) -> Self {
        if distance_meters < thresholds.low_max_meters {
            Self::Low
        } else if distance_meters < thresholds.weak_max_meters {
            Self::Weak
        } else {
            Self::Normal
        }
    }
}

/// Derived movement summary for one animal's recent track.
///
/// Ephemeral view model: recomputed on every analysis call and discarded
/// after rendering. Distances are meters under the planar approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Sum of consecutive pairwise distances across the full sorted track
    pub total_distance_meters: f64,
    /// Straight-line distance between the first and last fix
    pub direct_distance_meters: f64,
    /// Number of fixes considered
    pub point_count: usize,
    /// Distance walked today, pairs within today's subsequence only
    pub today_distance_meters: f64,
    /// Distance walked yesterday, pairs within yesterday's subsequence only
    pub yesterday_distance_meters: f64,
    /// Number of fixes reported today
    pub today_point_count: usize,
    /// Number of fixes reported yesterday
    pub yesterday_point_count: usize,
    /// Distance attributed to each local hour of today, keyed by the hour of
    /// the later fix in each consecutive pair
    pub hourly_distance_meters: [f64; HOURS_PER_DAY],
    /// Number of today's fixes reported within each local hour
    pub hourly_fix_counts: [u32; HOURS_PER_DAY],
    /// Hour bucket with the most accumulated distance; `None` when no bucket
    /// saw movement. Ties resolve to the lowest hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_active_hour: Option<u8>,
    /// Percentage change of today's distance against yesterday's. `None` when
    /// yesterday has no distance to compare against — a missing baseline is
    /// deliberately distinguishable from a real 0% change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_over_day_change_percent: Option<f64>,
    /// Classification of today's movement volume
    pub activity_state: ActivityState,
}

impl TrackSummary {
    /// Whether enough fixes were supplied to derive movement at all.
    ///
    /// Callers must treat `false` as "insufficient data", not as a track that
    /// genuinely covered zero meters.
    #[must_use]
    pub const fn has_sufficient_data(&self) -> bool {
        self.point_count >= 2
    }

    /// Degenerate summary for empty or single-fix input
    fn insufficient(point_count: usize, activity_state: ActivityState) -> Self {
        Self {
            total_distance_meters: 0.0,
            direct_distance_meters: 0.0,
            point_count,
            today_distance_meters: 0.0,
            yesterday_distance_meters: 0.0,
            today_point_count: 0,
            yesterday_point_count: 0,
            hourly_distance_meters: [0.0; HOURS_PER_DAY],
            hourly_fix_counts: [0; HOURS_PER_DAY],
            most_active_hour: None,
            day_over_day_change_percent: None,
            activity_state,
        }
    }
}

/// Analyzer turning raw fix collections into [`TrackSummary`] values
#[derive(Debug, Clone, Default)]
pub struct TrackAnalyzer {
    config: AnalyticsConfig,
}

impl TrackAnalyzer {
    /// Create an analyzer with the platform default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom configuration
    #[must_use]
    pub const fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Summarize a collection of fixes as of `now`.
    ///
    /// Fixes may arrive in any order; a copy is sorted ascending by timestamp
    /// before any distance accumulates, so every permutation of the same
    /// input yields the same summary. `now`'s timezone fixes the calendar-day
    /// boundary and the wall-clock hour used for bucketing.
    ///
    /// Never fails: fewer than two fixes produces a degenerate summary with
    /// zeroed distances and `None` sentinels (see
    /// [`TrackSummary::has_sufficient_data`]). Duplicate timestamps simply
    /// contribute zero-distance pairs. All fixes must carry finite
    /// coordinates, which [`Fix::new`] guarantees.
    #[must_use]
    pub fn summarize<Tz: TimeZone>(&self, fixes: &[Fix], now: &DateTime<Tz>) -> TrackSummary {
        let mut sorted: Vec<Fix> = fixes.to_vec();
        sorted.sort_by_key(|fix| fix.timestamp);

        let point_count = sorted.len();
        let thresholds = &self.config.thresholds;
        if point_count < 2 {
            debug!(point_count, "insufficient fixes for track analysis");
            return TrackSummary::insufficient(
                point_count,
                ActivityState::from_daily_distance(0.0, thresholds),
            );
        }

        let scale = self.config.meters_per_degree;
        let total_distance_meters: f64 = sorted
            .windows(2)
            .map(|pair| planar_distance_scaled(&pair[0], &pair[1], scale))
            .sum();
        let direct_distance_meters = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => planar_distance_scaled(first, last, scale),
            _ => 0.0,
        };

        let tz = now.timezone();
        let today = now.date_naive();
        let yesterday = today.pred_opt();

        let today_fixes: Vec<&Fix> = sorted
            .iter()
            .filter(|fix| fix.timestamp.with_timezone(&tz).date_naive() == today)
            .collect();
        let yesterday_fixes: Vec<&Fix> = sorted
            .iter()
            .filter(|fix| Some(fix.timestamp.with_timezone(&tz).date_naive()) == yesterday)
            .collect();

        let today_distance_meters = Self::path_distance(&today_fixes, scale);
        let yesterday_distance_meters = Self::path_distance(&yesterday_fixes, scale);

        let mut hourly_distance_meters = [0.0_f64; HOURS_PER_DAY];
        for pair in today_fixes.windows(2) {
            // Movement between two fixes belongs to the hour it ended in.
            let hour = pair[1].timestamp.with_timezone(&tz).hour() as usize;
            hourly_distance_meters[hour] += planar_distance_scaled(pair[0], pair[1], scale);
        }

        let mut hourly_fix_counts = [0_u32; HOURS_PER_DAY];
        for fix in &today_fixes {
            let hour = fix.timestamp.with_timezone(&tz).hour() as usize;
            hourly_fix_counts[hour] += 1;
        }

        let most_active_hour = Self::most_active_hour(&hourly_distance_meters);

        let day_over_day_change_percent = if yesterday_distance_meters > 0.0 {
            Some(
                (today_distance_meters - yesterday_distance_meters) / yesterday_distance_meters
                    * 100.0,
            )
        } else {
            None
        };

        TrackSummary {
            total_distance_meters,
            direct_distance_meters,
            point_count,
            today_distance_meters,
            yesterday_distance_meters,
            today_point_count: today_fixes.len(),
            yesterday_point_count: yesterday_fixes.len(),
            hourly_distance_meters,
            hourly_fix_counts,
            most_active_hour,
            day_over_day_change_percent,
            activity_state: ActivityState::from_daily_distance(today_distance_meters, thresholds),
        }
    }

    /// Sum of consecutive pairwise distances within one day's subsequence
    fn path_distance(fixes: &[&Fix], meters_per_degree: f64) -> f64 {
        fixes
            .windows(2)
            .map(|pair| planar_distance_scaled(pair[0], pair[1], meters_per_degree))
            .sum()
    }

    /// Bucket with the strictly largest distance; first (lowest) hour wins ties
    fn most_active_hour(buckets: &[f64; HOURS_PER_DAY]) -> Option<u8> {
        let mut best: Option<(usize, f64)> = None;
        for (hour, &distance) in buckets.iter().enumerate() {
            if distance > 0.0 && best.is_none_or(|(_, max)| distance > max) {
                best = Some((hour, distance));
            }
        }
        best.map(|(hour, _)| hour as u8)
    }
}
