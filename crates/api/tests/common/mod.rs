#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use schoolhub_api::{app, config::ApiConfig, ApiState};
use serde_json::{json, Value};

pub fn test_server() -> TestServer {
    test_server_with(ApiConfig::default())
}

pub fn test_server_with(config: ApiConfig) -> TestServer {
    let state = Arc::new(ApiState::from_config(&config));
    TestServer::new(app(state)).expect("Failed to build test server")
}

/// A weekly Monday block running through the autumn term.
pub fn weekly_block(id: &str, room: &str, teacher: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "title": "Lesson",
        "type": "class",
        "recurrence": "weekly",
        "dayOfWeek": "Mon",
        "startDate": "2024-09-02",
        "endDate": "2024-12-20",
        "startTime": start,
        "endTime": end,
        "location": room,
        "teacherId": teacher
    })
}
