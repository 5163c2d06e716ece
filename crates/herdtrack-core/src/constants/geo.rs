// ABOUTME: Geographic constants for the planar distance approximation
// ABOUTME: Degree-to-meter scaling, bucket counts, and retrieval window bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

/// Meters per degree of latitude/longitude under the flat-earth approximation.
///
/// The platform scales raw degree-space deltas by this single constant instead
/// of doing geodesic math. Valid only for the short separations and
/// mid-latitudes typical of a grazing herd; longitude convergence at high
/// latitude is deliberately ignored so that derived distances stay
/// bit-compatible with the dashboard's historical outputs.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Number of local-time hour buckets in a daily activity histogram
pub const HOURS_PER_DAY: usize = 24;

/// Default cap on fixes fetched for one analysis window.
///
/// Matches the dashboard's newest-first retrieval bound; analytics never needs
/// more history than this to render a two-day comparison.
pub const DEFAULT_MAX_RECENT_FIXES: usize = 1_000;
