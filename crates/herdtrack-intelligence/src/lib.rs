// ABOUTME: Track analytics engine computing distance, activity, and classification summaries
// ABOUTME: Consolidates the per-surface movement math into one deterministic module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

#![deny(unsafe_code)]

//! # Herdtrack Intelligence
//!
//! Pure analytics over ordered sequences of GPS fixes. Every presentation
//! surface — live stats table, activity charts, chat grounding — consumes the
//! same [`TrackAnalyzer`] output instead of re-deriving movement math, which
//! is how the platform keeps hour-attribution and threshold rules from
//! drifting between views.
//!
//! ## Modules
//!
//! - **config**: Analyzer configuration (thresholds, degree scaling)
//! - **distance**: The planar short-range distance approximation
//! - **track_analytics**: [`TrackAnalyzer`] and the [`TrackSummary`] view model
//! - **narrative**: Deterministic fact-sheet formatting for chat grounding

/// Analyzer configuration structures
pub mod config;

/// Planar short-range distance approximation
pub mod distance;

/// Fact-sheet and prompt-assembly formatting for the chat collaborator
pub mod narrative;

/// Track summarization engine and its output view model
pub mod track_analytics;

pub use config::{ActivityThresholds, AnalyticsConfig};
pub use distance::planar_distance;
pub use track_analytics::{ActivityState, TrackAnalyzer, TrackSummary};
