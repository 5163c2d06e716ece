// ABOUTME: Activity classification thresholds for daily movement volume
// ABOUTME: Meter boundaries between the LOW, WEAK, and NORMAL activity states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

/// Daily distance below which an animal is classified as low activity (meters)
pub const LOW_ACTIVITY_MAX_METERS: f64 = 50.0;

/// Daily distance below which an animal is classified as weak activity (meters).
///
/// At or above this bound the animal counts as normally active. Both
/// thresholds are user-facing label boundaries and must not drift.
pub const WEAK_ACTIVITY_MAX_METERS: f64 = 300.0;
