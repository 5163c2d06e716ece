// ABOUTME: Deterministic movement fact sheets and prompt assembly for the chat collaborator
// ABOUTME: Formats summary values to one decimal; never computes new numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

//! Movement narrative formatting
//!
//! The chat assistant grounds farmer questions with a short fact sheet derived
//! from track analytics. Formatting here is pure string templating: the facts
//! block is handed to the external language-model collaborator verbatim as
//! untrusted context, never interpreted as instructions, and this module does
//! no numeric work beyond one-decimal rendering.

use crate::track_analytics::TrackSummary;

/// Fixed report returned when fewer than two fixes exist
pub const INSUFFICIENT_DATA_REPORT: &str = "Not enough GPS data to evaluate movement.";

/// Question keywords that suggest GPS facts would help the answer
const MOVEMENT_KEYWORDS: &[&str] = &[
    "move", "activity", "active", "where", "gps", "track", "distance", "meter", "km", "today",
    "yesterday", "walk", "graze",
];

/// Render the fixed-format movement fact sheet.
///
/// Values print with one decimal place. With fewer than two fixes the sheet
/// collapses to [`INSUFFICIENT_DATA_REPORT`].
#[must_use]
pub fn movement_report(
    direct_distance_meters: f64,
    total_distance_meters: f64,
    point_count: usize,
) -> String {
    if point_count < 2 {
        return INSUFFICIENT_DATA_REPORT.to_owned();
    }
    format!(
        "GPS MOVEMENT SUMMARY (FACTS):\n\
         - Direct displacement from first to last fix: {direct_distance_meters:.1} m\n\
         - Total distance travelled along the track: {total_distance_meters:.1} m\n\
         - Number of recorded fixes: {point_count}\n"
    )
}

/// Render the fact sheet for an already-computed summary
#[must_use]
pub fn movement_report_for(summary: &TrackSummary) -> String {
    movement_report(
        summary.direct_distance_meters,
        summary.total_distance_meters,
        summary.point_count,
    )
}

/// Whether a chat question looks like it needs GPS grounding.
///
/// Case-insensitive keyword heuristic; a miss only means the question goes to
/// the model without a facts block attached.
#[must_use]
pub fn wants_movement_context(question: &str) -> bool {
    let lowered = question.to_lowercase();
    MOVEMENT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Assemble the user-side prompt sent to the chat collaborator.
///
/// When a non-empty facts block is supplied the question is wrapped with it
/// under fixed labels; otherwise the question passes through unchanged.
#[must_use]
pub fn grounded_prompt(question: &str, facts: Option<&str>) -> String {
    match facts.map(str::trim).filter(|block| !block.is_empty()) {
        Some(block) => {
            format!("GPS FACTS (IF RELEVANT):\n{block}\n\nUSER QUESTION:\n{question}\n")
        }
        None => question.to_owned(),
    }
}
