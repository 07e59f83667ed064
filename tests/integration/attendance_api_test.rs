// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{intern_identity, spawn_app};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_check_in_then_out_derives_full_day() {
    let app = spawn_app(intern_identity(Some(Uuid::new_v4())));

    let check_in = app
        .server
        .post("/v1/attendance/check-in")
        .json(&json!({ "timestamp": "2025-09-01T09:00:00+08:00" }))
        .await;

    check_in.assert_status_ok();
    let body = check_in.json::<serde_json::Value>();
    assert_eq!(body["attendance"]["status"], "present");
    assert_eq!(body["attendance"]["working_hours"], 0.0);

    let check_out = app
        .server
        .post("/v1/attendance/check-out")
        .json(&json!({ "timestamp": "2025-09-01T17:30:00+08:00" }))
        .await;

    check_out.assert_status_ok();
    let body = check_out.json::<serde_json::Value>();
    assert_eq!(body["attendance"]["status"], "present");
    assert_eq!(body["attendance"]["working_hours"], 8.5);
}

#[tokio::test]
async fn test_late_check_in_derives_late_status() {
    let app = spawn_app(intern_identity(Some(Uuid::new_v4())));

    app.server
        .post("/v1/attendance/check-in")
        .json(&json!({ "timestamp": "2025-09-01T09:40:00+08:00" }))
        .await
        .assert_status_ok();

    let check_out = app
        .server
        .post("/v1/attendance/check-out")
        .json(&json!({ "timestamp": "2025-09-01T18:00:00+08:00" }))
        .await;

    check_out.assert_status_ok();
    let body = check_out.json::<serde_json::Value>();
    assert_eq!(body["attendance"]["status"], "late");
}

#[tokio::test]
async fn test_duplicate_check_in_rejected() {
    let app = spawn_app(intern_identity(Some(Uuid::new_v4())));

    app.server
        .post("/v1/attendance/check-in")
        .json(&json!({ "timestamp": "2025-09-01T09:00:00+08:00" }))
        .await
        .assert_status_ok();

    let repeat = app
        .server
        .post("/v1/attendance/check-in")
        .json(&json!({ "timestamp": "2025-09-01T09:30:00+08:00" }))
        .await;

    repeat.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_out_before_check_in_rejected() {
    let app = spawn_app(intern_identity(Some(Uuid::new_v4())));

    app.server
        .post("/v1/attendance/check-in")
        .json(&json!({ "timestamp": "2025-09-01T17:00:00+08:00" }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/v1/attendance/check-out")
        .json(&json!({ "timestamp": "2025-09-01T09:00:00+08:00" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_out_requires_check_in() {
    let app = spawn_app(intern_identity(Some(Uuid::new_v4())));

    let response = app
        .server
        .post("/v1/attendance/check-out")
        .json(&json!({ "timestamp": "2025-09-01T17:00:00+08:00" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_attendance_history_lists_records() {
    let app = spawn_app(intern_identity(Some(Uuid::new_v4())));

    for day in ["01", "02"] {
        app.server
            .post("/v1/attendance/check-in")
            .json(&json!({ "timestamp": format!("2025-09-{day}T09:00:00+08:00") }))
            .await
            .assert_status_ok();
        app.server
            .post("/v1/attendance/check-out")
            .json(&json!({ "timestamp": format!("2025-09-{day}T17:30:00+08:00") }))
            .await
            .assert_status_ok();
    }

    let response = app.server.get("/v1/attendance").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let records = body["records"].as_array().expect("records");
    assert_eq!(records.len(), 2);
    // 按日期降序
    assert_eq!(records[0]["date"], "2025-09-02");
    assert_eq!(body["present_days"], 2);
}
