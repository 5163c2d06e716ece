// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for geographic scaling and activity classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! Constants module
//!
//! Application constants grouped by domain rather than collected in a single
//! large file.

/// Activity classification thresholds
pub mod activity;
/// Geographic scaling and retrieval-window constants
pub mod geo;

pub use activity::*;
pub use geo::*;
