// ABOUTME: Device model representing one registered GPS collar
// ABOUTME: Tracks display name, hardware identifier, and online/last-seen status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered GPS collar.
///
/// Registration, ownership, and credential handling live in the managed
/// backend; this model carries only what the analytics surfaces and the
/// ingestion status path need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Stable platform identifier
    pub id: Uuid,
    /// Farmer-facing display name (e.g. "Bella")
    pub name: String,
    /// Identifier printed on the physical collar
    pub hardware_id: String,
    /// Whether the collar has reported recently
    pub is_online: bool,
    /// Timestamp of the most recent accepted position report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

impl Device {
    /// Create a device record that has never reported a position
    #[must_use]
    pub fn new(name: impl Into<String>, hardware_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            hardware_id: hardware_id.into(),
            is_online: false,
            last_seen: None,
        }
    }

    /// Mark the device online after an accepted position report
    pub fn touch(&mut self, seen_at: DateTime<Utc>) {
        self.is_online = true;
        self.last_seen = Some(seen_at);
    }
}
