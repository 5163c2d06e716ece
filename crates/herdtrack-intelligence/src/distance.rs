// ABOUTME: Planar short-range distance approximation between two GPS fixes
// ABOUTME: Euclidean degree-space delta scaled by a fixed meters-per-degree constant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! Planar distance approximation
//!
//! The platform measures movement as the Euclidean distance between two fixes
//! in degree space, scaled by a fixed 111 000 m/degree constant. This is a
//! deliberate flat-earth simplification: grazing ranges are a few hundred
//! meters across, so the error against true geodesic distance is far below
//! GPS noise, and the historical dashboard outputs were produced with exactly
//! this formula. Swapping in haversine or a geodesic library would change
//! every user-visible distance and must be shipped as a documented behavior
//! change, which is why the formula is isolated behind this one function.

use herdtrack_core::constants::METERS_PER_DEGREE;
use herdtrack_core::models::Fix;

/// Distance in meters between two fixes under the platform approximation.
///
/// Symmetric, zero for identical coordinates. Not corrected for longitude
/// convergence at high latitude. Inputs must carry finite coordinates
/// (guaranteed by [`Fix::new`]).
#[must_use]
pub fn planar_distance(a: &Fix, b: &Fix) -> f64 {
    planar_distance_scaled(a, b, METERS_PER_DEGREE)
}

/// Distance between two fixes with an explicit degree-to-meter scale.
///
/// Used by the analyzer so a configured scale flows through every pairwise
/// computation consistently.
#[must_use]
pub fn planar_distance_scaled(a: &Fix, b: &Fix, meters_per_degree: f64) -> f64 {
    let d_lat = b.latitude - a.latitude;
    let d_lon = b.longitude - a.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt() * meters_per_degree
}
