// ABOUTME: Core types and constants for the Herdtrack livestock monitoring platform
// ABOUTME: Foundation crate with domain models, error types, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

#![deny(unsafe_code)]

//! # Herdtrack Core
//!
//! Foundation crate providing the shared vocabulary of the Herdtrack livestock
//! GPS analytics platform. This crate changes infrequently so that the
//! analytics and provider crates can compile incrementally against it.
//!
//! ## Modules
//!
//! - **models**: Domain models (`Fix`, `Device`) shared by every consumer
//! - **errors**: Unified error handling with `TrackError`
//! - **constants**: Platform constants organized by domain (geo, activity)

/// Platform constants organized by domain
pub mod constants;

/// Unified error handling for track data
pub mod errors;

/// Core data models (`Fix`, `Device`)
pub mod models;

pub use errors::TrackError;
pub use models::{Device, Fix};
