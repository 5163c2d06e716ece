// ABOUTME: Facade crate re-exporting the Herdtrack workspace under stable paths
// ABOUTME: Consumers depend on herdtrack and reach models, intelligence, and providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

#![deny(unsafe_code)]

//! # Herdtrack
//!
//! Livestock GPS track analytics. A collar reports timestamped position
//! fixes; this workspace turns a recent window of them into the movement
//! summaries a farm dashboard renders and a chat assistant grounds its
//! answers with.
//!
//! The interesting work lives in [`intelligence`]: one deterministic
//! summarization pass over a sorted track, replacing the near-identical
//! distance math that used to be duplicated across presentation surfaces.
//! [`providers`] is the narrow data-access seam in front of the managed
//! backend, and [`models`]/[`errors`]/[`constants`] come from the core crate.

pub use herdtrack_core::constants;
pub use herdtrack_core::errors;
pub use herdtrack_core::models;

pub use herdtrack_intelligence as intelligence;
pub use herdtrack_providers as providers;
