// ABOUTME: Analyzer configuration for track summarization
// ABOUTME: Activity-state thresholds and the degree-to-meter scale, with platform defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! Track Analyzer Configuration
//!
//! Thresholds and scaling used by [`crate::TrackAnalyzer`]. Defaults reproduce
//! the platform's user-facing labels exactly; overriding them changes
//! observable output and should be treated as a product decision, not a
//! tuning knob.

use herdtrack_core::constants::{
    LOW_ACTIVITY_MAX_METERS, METERS_PER_DEGREE, WEAK_ACTIVITY_MAX_METERS,
};
use serde::{Deserialize, Serialize};

/// Track analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Daily-distance boundaries between activity states
    pub thresholds: ActivityThresholds,
    /// Meters per degree used by the planar distance approximation
    pub meters_per_degree: f64,
}

/// Daily-distance boundaries between the three activity states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityThresholds {
    /// Distances below this are classified LOW (meters)
    pub low_max_meters: f64,
    /// Distances below this (and at or above the LOW bound) are WEAK (meters)
    pub weak_max_meters: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            thresholds: ActivityThresholds::default(),
            meters_per_degree: METERS_PER_DEGREE,
        }
    }
}

impl Default for ActivityThresholds {
    fn default() -> Self {
        Self {
            low_max_meters: LOW_ACTIVITY_MAX_METERS,
            weak_max_meters: WEAK_ACTIVITY_MAX_METERS,
        }
    }
}
