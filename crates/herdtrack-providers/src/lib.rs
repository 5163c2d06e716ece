// ABOUTME: Fix retrieval and ingestion seam between analytics and the managed backend
// ABOUTME: Defines the FixProvider trait, bounded windows, and provider errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

#![deny(unsafe_code)]

//! # Herdtrack Providers
//!
//! The analytics engine never talks to storage directly; it is handed a
//! materialized `Vec<Fix>` by a collaborator implementing [`FixProvider`].
//! The contract is deliberately narrow — "fetch recent fixes for a device,
//! bounded by count or time window" — so the managed backend behind it stays
//! swappable. An in-memory implementation backs the test suite.

/// In-memory provider implementation
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herdtrack_core::constants::DEFAULT_MAX_RECENT_FIXES;
use herdtrack_core::errors::TrackError;
use herdtrack_core::models::{Device, Fix};
use uuid::Uuid;

pub use memory::InMemoryFixStore;

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors surfaced by fix providers
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The requested device is not registered with this provider
    #[error("Device '{device_id}' not found")]
    DeviceNotFound {
        /// ID of the device that was not found
        device_id: Uuid,
    },

    /// An ingestion payload failed fix validation
    #[error("Rejected position report")]
    InvalidFix {
        /// Underlying validation error
        #[from]
        source: TrackError,
    },
}

/// Bounds on one fix retrieval.
///
/// Retrieval is newest-first up to `max_fixes`, optionally restricted to
/// fixes at or after `since`. The default cap matches the dashboard's query
/// bound; analytics needs no more history than that for a two-day comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixWindow {
    /// Maximum number of fixes to return
    pub max_fixes: usize,
    /// Only fixes at or after this instant, when set
    pub since: Option<DateTime<Utc>>,
}

impl Default for FixWindow {
    fn default() -> Self {
        Self {
            max_fixes: DEFAULT_MAX_RECENT_FIXES,
            since: None,
        }
    }
}

impl FixWindow {
    /// Window bounded by count only
    #[must_use]
    pub const fn newest(max_fixes: usize) -> Self {
        Self {
            max_fixes,
            since: None,
        }
    }

    /// Restrict the window to fixes at or after `since`
    #[must_use]
    pub const fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }
}

/// Narrow data-access contract consumed by the analytics surfaces.
///
/// Implementations make no ordering promise on returned fixes; the analyzer
/// sorts defensively before accumulating distance.
#[async_trait]
pub trait FixProvider: Send + Sync {
    /// Fetch a device's recent fixes within the given window.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::DeviceNotFound` for an unknown device.
    async fn recent_fixes(&self, device_id: Uuid, window: &FixWindow) -> ProviderResult<Vec<Fix>>;

    /// Look up a registered device.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::DeviceNotFound` for an unknown device.
    async fn device(&self, device_id: Uuid) -> ProviderResult<Device>;
}
