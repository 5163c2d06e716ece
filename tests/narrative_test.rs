// ABOUTME: Integration tests for movement fact sheets and chat prompt assembly
// ABOUTME: Verifies fixed formats, one-decimal rendering, and grounding heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use herdtrack::intelligence::narrative::{
    grounded_prompt, movement_report, movement_report_for, wants_movement_context,
    INSUFFICIENT_DATA_REPORT,
};
use herdtrack::intelligence::TrackAnalyzer;
use herdtrack::models::Fix;

#[test]
fn test_movement_report_formats_one_decimal() {
    let report = movement_report(12.34, 456.78, 42);

    assert_eq!(
        report,
        "GPS MOVEMENT SUMMARY (FACTS):\n\
         - Direct displacement from first to last fix: 12.3 m\n\
         - Total distance travelled along the track: 456.8 m\n\
         - Number of recorded fixes: 42\n"
    );
}

#[test]
fn test_movement_report_insufficient_data() {
    assert_eq!(movement_report(0.0, 0.0, 0), INSUFFICIENT_DATA_REPORT);
    assert_eq!(movement_report(0.0, 0.0, 1), INSUFFICIENT_DATA_REPORT);
}

#[test]
fn test_movement_report_for_summary() {
    let analyzer = TrackAnalyzer::new();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let fixes = vec![
        Fix::new(48.0, 17.0, Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap()).unwrap(),
        Fix::new(
            48.0009,
            17.0,
            Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
        )
        .unwrap(),
    ];

    let summary = analyzer.summarize(&fixes, &now);
    let report = movement_report_for(&summary);

    assert!(report.contains("99.9 m"));
    assert!(report.contains("Number of recorded fixes: 2"));
}

#[test]
fn test_grounded_prompt_with_facts() {
    let prompt = grounded_prompt("Where is Bella?", Some("- Total: 120.0 m"));

    assert_eq!(
        prompt,
        "GPS FACTS (IF RELEVANT):\n- Total: 120.0 m\n\nUSER QUESTION:\nWhere is Bella?\n"
    );
}

#[test]
fn test_grounded_prompt_without_facts_passes_question_through() {
    assert_eq!(grounded_prompt("How do I treat hoof rot?", None), "How do I treat hoof rot?");
    // Blank facts blocks count as absent
    assert_eq!(grounded_prompt("Question", Some("   ")), "Question");
}

#[test]
fn test_wants_movement_context_keywords() {
    assert!(wants_movement_context("How far did she walk today?"));
    assert!(wants_movement_context("Show me the GPS track"));
    assert!(wants_movement_context("Was the cow ACTIVE yesterday?"));
    assert!(!wants_movement_context("What should calves eat in winter?"));
}
