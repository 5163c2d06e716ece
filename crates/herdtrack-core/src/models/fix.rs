// ABOUTME: Fix model representing a single timestamped GPS position reading
// ABOUTME: Validates finite coordinates at construction; carries optional sensor fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{TrackError, TrackResult};

/// A single reported GPS position for one animal.
///
/// Fixes are produced by the ingestion path and are read-only from the
/// analytics engine's perspective. The `timestamp` is the ordering key;
/// duplicate timestamps are allowed and contribute zero-distance pairs
/// during analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// When the position was reported (UTC)
    pub timestamp: DateTime<Utc>,
    /// Altitude in meters, if the device reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Instantaneous speed in m/s, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Horizontal accuracy estimate in meters, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl Fix {
    /// Create a validated fix from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns `TrackError::InvalidCoordinate` when either coordinate is
    /// non-finite or outside the valid degree range. Analytics assumes every
    /// fix it receives passed this check, so NaN can never propagate into a
    /// summary.
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> TrackResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(TrackError::InvalidCoordinate {
                latitude,
                longitude,
                reason: "coordinate is not a finite number",
            });
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(TrackError::InvalidCoordinate {
                latitude,
                longitude,
                reason: "coordinate outside valid degree range",
            });
        }
        Ok(Self {
            latitude,
            longitude,
            timestamp,
            altitude: None,
            speed: None,
            accuracy: None,
        })
    }

    /// Attach optional sensor readings reported alongside the position.
    ///
    /// These fields are pass-through: stored and re-serialized but never used
    /// by the analytics engine.
    #[must_use]
    pub const fn with_sensors(
        mut self,
        altitude: Option<f64>,
        speed: Option<f64>,
        accuracy: Option<f64>,
    ) -> Self {
        self.altitude = altitude;
        self.speed = speed;
        self.accuracy = accuracy;
        self
    }

    /// Whether both coordinates are finite numbers
    #[must_use]
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}
