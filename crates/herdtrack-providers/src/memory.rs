// ABOUTME: In-memory FixProvider used by tests and local development
// ABOUTME: Validates ingested reports and tracks device online status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! In-memory fix store
//!
//! Behaves like the managed backend from the analytics surfaces' point of
//! view: accepted position reports append a validated [`Fix`] and mark the
//! device online with a fresh `last_seen`; retrieval returns the newest fixes
//! first, capped by the requested window.

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herdtrack_core::models::{Device, Fix};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{FixProvider, FixWindow, ProviderError, ProviderResult};

/// One raw position report from a collar.
///
/// Mirrors the ingestion payload accepted by the platform's edge function,
/// minus transport and credential fields. A missing timestamp means
/// "received now", matching the backend's insert default.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionReport {
    /// Reported latitude in decimal degrees
    pub latitude: f64,
    /// Reported longitude in decimal degrees
    pub longitude: f64,
    /// When the position was measured; defaults to receipt time
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Altitude in meters, if the collar reported one
    #[serde(default)]
    pub altitude: Option<f64>,
    /// Instantaneous speed in m/s, if reported
    #[serde(default)]
    pub speed: Option<f64>,
    /// Horizontal accuracy estimate in meters, if reported
    #[serde(default)]
    pub accuracy: Option<f64>,
}

/// In-memory implementation of [`FixProvider`]
#[derive(Debug, Default)]
pub struct InMemoryFixStore {
    devices: RwLock<HashMap<Uuid, Device>>,
    fixes: RwLock<HashMap<Uuid, Vec<Fix>>>,
}

impl InMemoryFixStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device and return its platform ID
    #[must_use = "the returned ID is the key for all later operations"]
    pub async fn register_device(&self, device: Device) -> Uuid {
        let id = device.id;
        self.devices.write().await.insert(id, device);
        id
    }

    /// Accept one position report for a registered device.
    ///
    /// Validates the coordinates, appends the fix, and marks the device
    /// online with `last_seen` set to the fix timestamp.
    ///
    /// # Errors
    ///
    /// `ProviderError::DeviceNotFound` for an unknown device;
    /// `ProviderError::InvalidFix` when coordinate validation rejects the
    /// report.
    pub async fn record_fix(&self, device_id: Uuid, report: PositionReport) -> ProviderResult<()> {
        let mut devices = self.devices.write().await;
        let device = devices
            .get_mut(&device_id)
            .ok_or(ProviderError::DeviceNotFound { device_id })?;

        let timestamp = report.timestamp.unwrap_or_else(Utc::now);
        let fix = Fix::new(report.latitude, report.longitude, timestamp)
            .map_err(|source| {
                warn!(%device_id, "rejected position report: {source}");
                source
            })?
            .with_sensors(report.altitude, report.speed, report.accuracy);

        device.touch(timestamp);
        self.fixes.write().await.entry(device_id).or_default().push(fix);
        debug!(%device_id, "accepted position report");
        Ok(())
    }
}

#[async_trait]
impl FixProvider for InMemoryFixStore {
    async fn recent_fixes(&self, device_id: Uuid, window: &FixWindow) -> ProviderResult<Vec<Fix>> {
        if !self.devices.read().await.contains_key(&device_id) {
            return Err(ProviderError::DeviceNotFound { device_id });
        }

        let fixes = self.fixes.read().await;
        let mut recent: Vec<Fix> = fixes
            .get(&device_id)
            .map(|track| {
                track
                    .iter()
                    .filter(|fix| window.since.is_none_or(|since| fix.timestamp >= since))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        // Newest first, then cap, as the dashboard queries its backend.
        recent.sort_by_key(|fix| Reverse(fix.timestamp));
        recent.truncate(window.max_fixes);
        Ok(recent)
    }

    async fn device(&self, device_id: Uuid) -> ProviderResult<Device> {
        self.devices
            .read()
            .await
            .get(&device_id)
            .cloned()
            .ok_or(ProviderError::DeviceNotFound { device_id })
    }
}
