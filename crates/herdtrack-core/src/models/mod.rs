// ABOUTME: Core data models shared across the Herdtrack workspace
// ABOUTME: Re-exports Fix (GPS position) and Device (tracked collar) types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! Domain models for the Herdtrack platform

/// Tracked collar device model
pub mod device;
/// Timestamped GPS position model
pub mod fix;

pub use device::Device;
pub use fix::Fix;
