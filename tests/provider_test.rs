// ABOUTME: Integration tests for the in-memory fix provider and ingestion path
// ABOUTME: Covers bounded retrieval, validation, device status, and the end-to-end flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdtrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use herdtrack::errors::TrackError;
use herdtrack::intelligence::narrative::movement_report_for;
use herdtrack::intelligence::{ActivityState, TrackAnalyzer};
use herdtrack::models::Device;
use herdtrack::providers::memory::PositionReport;
use herdtrack::providers::{FixProvider, FixWindow, InMemoryFixStore, ProviderError};
use uuid::Uuid;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap()
}

fn report(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> PositionReport {
    PositionReport {
        latitude,
        longitude,
        timestamp: Some(timestamp),
        altitude: None,
        speed: None,
        accuracy: None,
    }
}

async fn store_with_device() -> (InMemoryFixStore, Uuid) {
    let store = InMemoryFixStore::new();
    let id = store
        .register_device(Device::new("Bella", "COLLAR-0001"))
        .await;
    (store, id)
}

#[tokio::test]
async fn test_record_and_fetch_roundtrip() {
    let (store, id) = store_with_device().await;

    store.record_fix(id, report(48.0, 17.0, base_time())).await.unwrap();
    store
        .record_fix(id, report(48.0009, 17.0, base_time() + Duration::hours(1)))
        .await
        .unwrap();

    let fixes = store.recent_fixes(id, &FixWindow::default()).await.unwrap();
    assert_eq!(fixes.len(), 2);
    // Newest first, like the dashboard's backend query
    assert_eq!(fixes[0].timestamp, base_time() + Duration::hours(1));
}

#[tokio::test]
async fn test_window_caps_fix_count() {
    let (store, id) = store_with_device().await;

    for i in 0..10 {
        store
            .record_fix(id, report(48.0, 17.0, base_time() + Duration::minutes(i)))
            .await
            .unwrap();
    }

    let fixes = store.recent_fixes(id, &FixWindow::newest(3)).await.unwrap();
    assert_eq!(fixes.len(), 3);
    // The cap keeps the newest fixes
    assert_eq!(fixes[0].timestamp, base_time() + Duration::minutes(9));
    assert_eq!(fixes[2].timestamp, base_time() + Duration::minutes(7));
}

#[tokio::test]
async fn test_window_since_filters_old_fixes() {
    let (store, id) = store_with_device().await;

    store.record_fix(id, report(48.0, 17.0, base_time())).await.unwrap();
    store
        .record_fix(id, report(48.0, 17.0, base_time() + Duration::hours(2)))
        .await
        .unwrap();

    let window = FixWindow::default().since(base_time() + Duration::hours(1));
    let fixes = store.recent_fixes(id, &window).await.unwrap();
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].timestamp, base_time() + Duration::hours(2));
}

#[tokio::test]
async fn test_invalid_coordinates_rejected() {
    let (store, id) = store_with_device().await;

    let err = store
        .record_fix(id, report(f64::NAN, 17.0, base_time()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProviderError::InvalidFix {
            source: TrackError::InvalidCoordinate { .. }
        }
    ));

    let err = store
        .record_fix(id, report(48.0, 200.0, base_time()))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::InvalidFix { .. }));

    // Nothing was stored
    let fixes = store.recent_fixes(id, &FixWindow::default()).await.unwrap();
    assert!(fixes.is_empty());
}

#[tokio::test]
async fn test_unknown_device_errors() {
    let store = InMemoryFixStore::new();
    let ghost = Uuid::new_v4();

    let err = store.recent_fixes(ghost, &FixWindow::default()).await.unwrap_err();
    assert!(matches!(err, ProviderError::DeviceNotFound { device_id } if device_id == ghost));

    let err = store.device(ghost).await.unwrap_err();
    assert!(matches!(err, ProviderError::DeviceNotFound { .. }));
}

#[tokio::test]
async fn test_accepted_report_marks_device_online() {
    let (store, id) = store_with_device().await;
    assert!(!store.device(id).await.unwrap().is_online);

    store.record_fix(id, report(48.0, 17.0, base_time())).await.unwrap();

    let device = store.device(id).await.unwrap();
    assert!(device.is_online);
    assert_eq!(device.last_seen, Some(base_time()));
}

#[tokio::test]
async fn test_sensor_fields_pass_through() {
    let (store, id) = store_with_device().await;
    let mut payload = report(48.0, 17.0, base_time());
    payload.altitude = Some(312.5);
    payload.speed = Some(0.4);
    payload.accuracy = Some(3.2);

    store.record_fix(id, payload).await.unwrap();

    let fixes = store.recent_fixes(id, &FixWindow::default()).await.unwrap();
    assert_eq!(fixes[0].altitude, Some(312.5));
    assert_eq!(fixes[0].speed, Some(0.4));
    assert_eq!(fixes[0].accuracy, Some(3.2));
}

#[tokio::test]
async fn test_position_report_deserializes_ingestion_payload() {
    let payload: PositionReport = serde_json::from_str(
        r#"{"latitude": 48.15, "longitude": 17.12, "altitude": 150.0}"#,
    )
    .unwrap();

    assert!((payload.latitude - 48.15).abs() < f64::EPSILON);
    assert_eq!(payload.timestamp, None);
    assert_eq!(payload.altitude, Some(150.0));
    assert_eq!(payload.speed, None);
}

#[tokio::test]
async fn test_end_to_end_ingest_analyze_narrate() {
    let (store, id) = store_with_device().await;
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    // A short morning graze: two fixes 99.9 m apart
    store.record_fix(id, report(48.0, 17.0, base_time())).await.unwrap();
    store
        .record_fix(id, report(48.0009, 17.0, base_time() + Duration::hours(1)))
        .await
        .unwrap();

    let fixes = store.recent_fixes(id, &FixWindow::default()).await.unwrap();
    // Provider returns newest first; the analyzer sorts defensively
    let summary = TrackAnalyzer::new().summarize(&fixes, &now);

    assert_eq!(summary.point_count, 2);
    assert_eq!(summary.activity_state, ActivityState::Weak);
    assert_eq!(summary.most_active_hour, Some(9));

    let facts = movement_report_for(&summary);
    assert!(facts.contains("99.9 m"));
}
