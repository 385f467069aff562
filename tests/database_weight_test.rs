// ABOUTME: Integration tests for the body-weight log store
// ABOUTME: Validates chronological ordering and per-user scoping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use cleberfit_server::errors::AppError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_weight_log_lists_chronologically() {
    let db = common::create_test_database().await.unwrap();
    let owner = common::create_test_user(&db, "Ana", "ana@exemplo.com")
        .await
        .unwrap();

    db.append_weight_entry(owner, 71.2, date(2025, 2, 1)).await.unwrap();
    db.append_weight_entry(owner, 70.4, date(2025, 3, 1)).await.unwrap();
    db.append_weight_entry(owner, 72.0, date(2025, 1, 1)).await.unwrap();

    let entries = db.list_weight_entries(owner).await.unwrap();
    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.recorded_at).collect();
    assert_eq!(
        dates,
        vec![date(2025, 1, 1), date(2025, 2, 1), date(2025, 3, 1)]
    );
    assert!((entries[0].weight - 72.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_weight_log_is_scoped_per_user() {
    let db = common::create_test_database().await.unwrap();
    let ana = common::create_test_user(&db, "Ana", "ana@exemplo.com")
        .await
        .unwrap();
    let bia = common::create_test_user(&db, "Bia", "bia@exemplo.com")
        .await
        .unwrap();

    db.append_weight_entry(ana, 70.0, date(2025, 1, 1)).await.unwrap();
    db.append_weight_entry(bia, 65.0, date(2025, 1, 1)).await.unwrap();

    let ana_entries = db.list_weight_entries(ana).await.unwrap();
    assert_eq!(ana_entries.len(), 1);
    assert_eq!(ana_entries[0].user_id, ana);
}

#[tokio::test]
async fn test_append_for_missing_user_is_not_found() {
    let db = common::create_test_database().await.unwrap();

    let err = db
        .append_weight_entry(555, 70.0, date(2025, 1, 1))
        .await
        .expect_err("Dangling owner must be rejected");
    assert!(matches!(err, AppError::NotFound(_)));
}
