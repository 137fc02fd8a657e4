mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use schoolhub_api::config::ApiConfig;
use schoolhub_core::{ConflictReport, Expansion};
use serde_json::{json, Value};

use common::{test_server, test_server_with, weekly_block};

const A: &str = "00000000-0000-0000-0000-00000000000a";
const B: &str = "00000000-0000-0000-0000-00000000000b";

#[tokio::test]
async fn test_expand_single_schedule() {
    let server = test_server();

    let response = server
        .post("/api/timetable/expand")
        .json(&json!({
            "schedule": weekly_block(A, "101", "t1", "09:00:00", "10:00:00"),
            "rangeStart": "2024-09-01",
            "rangeEnd": "2024-09-30"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let dates: Vec<_> = body["occurrences"]
        .as_array()
        .expect("occurrences array")
        .iter()
        .map(|occurrence| occurrence["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2024-09-02", "2024-09-09", "2024-09-16", "2024-09-23", "2024-09-30"]
    );
}

#[tokio::test]
async fn test_expand_misconfigured_schedule_is_unprocessable() {
    let server = test_server();
    let mut schedule = weekly_block(A, "101", "t1", "09:00:00", "10:00:00");
    schedule["dayOfWeek"] = Value::Null;

    let response = server
        .post("/api/timetable/expand")
        .json(&json!({
            "schedule": schedule,
            "rangeStart": "2024-09-01",
            "rangeEnd": "2024-09-30"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["details"]["scheduleId"], A);
    assert_eq!(body["details"]["issue"]["kind"], "missingDayOfWeek");
}

#[tokio::test]
async fn test_occurrences_report_rejected_schedules() {
    let server = test_server();
    let mut broken = weekly_block(B, "102", "t2", "11:00:00", "10:00:00");
    broken["title"] = json!("Broken");

    let response = server
        .post("/api/timetable/occurrences")
        .json(&json!({
            "schedules": [weekly_block(A, "101", "t1", "09:00:00", "10:00:00"), broken],
            "rangeStart": "2024-09-02",
            "rangeEnd": "2024-09-08"
        }))
        .await;

    response.assert_status_ok();
    let expansion = response.json::<Expansion>();
    assert_eq!(expansion.occurrences.len(), 1);
    assert_eq!(expansion.rejected.len(), 1);
    assert_eq!(expansion.rejected[0].schedule_id.to_string(), B);
}

#[tokio::test]
async fn test_occurrences_apply_filter() {
    let server = test_server();

    let response = server
        .post("/api/timetable/occurrences")
        .json(&json!({
            "schedules": [
                weekly_block(A, "101", "t1", "09:00:00", "10:00:00"),
                weekly_block(B, "102", "t2", "09:00:00", "10:00:00")
            ],
            "rangeStart": "2024-09-02",
            "rangeEnd": "2024-09-08",
            "filter": { "teacherId": "t2" }
        }))
        .await;

    response.assert_status_ok();
    let expansion = response.json::<Expansion>();
    assert_eq!(expansion.occurrences.len(), 1);
    assert_eq!(expansion.occurrences[0].schedule_id.to_string(), B);
}

#[tokio::test]
async fn test_conflicts_endpoint() {
    let server = test_server();

    let response = server
        .post("/api/timetable/conflicts")
        .json(&json!({
            "schedules": [
                weekly_block(A, "101", "t1", "09:00:00", "10:00:00"),
                weekly_block(B, "101", "t2", "09:30:00", "10:30:00")
            ],
            "rangeStart": "2024-09-02",
            "rangeEnd": "2024-09-08"
        }))
        .await;

    response.assert_status_ok();
    let report = response.json::<ConflictReport>();
    assert_eq!(report.conflicts.len(), 1);
    let conflict = &report.conflicts[0];
    assert_eq!(conflict.first.to_string(), A);
    assert_eq!(conflict.second.to_string(), B);
    assert_eq!(conflict.overlap_start.to_string(), "09:30:00");
    assert_eq!(conflict.overlap_end.to_string(), "10:00:00");

    let raw = serde_json::to_value(conflict).unwrap();
    assert_eq!(raw["sharedResources"], json!([{ "kind": "room", "id": "101" }]));
}

#[tokio::test]
async fn test_reversed_range_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/timetable/conflicts")
        .json(&json!({
            "schedules": [],
            "rangeStart": "2024-09-30",
            "rangeEnd": "2024-09-01"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_range_longer_than_limit_is_bad_request() {
    let server = test_server_with(ApiConfig {
        max_range_days: 7,
        ..ApiConfig::default()
    });

    let within = server
        .post("/api/timetable/occurrences")
        .json(&json!({
            "schedules": [],
            "rangeStart": "2024-09-02",
            "rangeEnd": "2024-09-08"
        }))
        .await;
    let beyond = server
        .post("/api/timetable/occurrences")
        .json(&json!({
            "schedules": [],
            "rangeStart": "2024-09-02",
            "rangeEnd": "2024-09-09"
        }))
        .await;

    within.assert_status_ok();
    beyond.assert_status(StatusCode::BAD_REQUEST);
}
