// ABOUTME: Unified error types for track data validation and retrieval
// ABOUTME: Defines TrackError with structured context for every failure class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! # Track Error Types
//!
//! Structured errors for the Herdtrack platform. The analytics engine itself
//! never fails — insufficient data is a defined degenerate output, not an
//! error — so these variants cover the boundaries around it: fix validation
//! at ingestion and device lookup in the data-access seam.

use uuid::Uuid;

/// Result alias for fallible Herdtrack operations
pub type TrackResult<T> = Result<T, TrackError>;

/// Common error types for track data operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum TrackError {
    /// A reported position carried a non-finite or out-of-range coordinate
    #[error("Invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        /// Latitude as received
        latitude: f64,
        /// Longitude as received
        longitude: f64,
        /// Reason the coordinate was rejected
        reason: &'static str,
    },

    /// The requested device is not registered
    #[error("Device '{device_id}' not found")]
    DeviceNotFound {
        /// ID of the device that was not found
        device_id: Uuid,
    },

    /// A required field was missing from an ingestion payload
    #[error("Missing required field '{field}' in position report")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
}
