mod common;

use axum::http::StatusCode;
use chrono::NaiveTime;
use schoolhub_api::{
    config::{parse_log_level, ApiConfig},
    middleware::error_handling::map_error,
};
use schoolhub_core::errors::{ConfigurationIssue, ScheduleConfigurationError, SchoolError};
use serde_json::Value;
use tracing::Level;
use uuid::Uuid;

use common::test_server;

#[tokio::test]
async fn test_error_handling_validation() {
    let response = map_error(SchoolError::Validation("Invalid input".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_configuration() {
    let error = SchoolError::Configuration(ScheduleConfigurationError {
        schedule_id: Uuid::new_v4(),
        issue: ConfigurationIssue::EmptyTimeWindow {
            start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        },
    });

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_and_version() {
    let server = test_server();

    let health = server.get("/health").await;
    let version = server.get("/version").await;

    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["status"], "ok");
    version.assert_status_ok();
    assert_eq!(version.json::<Value>()["service"], "schoolhub-api");
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("debug"), Level::DEBUG);
    assert_eq!(parse_log_level(" WARN "), Level::WARN);
    assert_eq!(parse_log_level("nonsense"), Level::INFO);
}

#[test]
fn test_default_config() {
    let config = ApiConfig::default();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.max_range_days, 366);
    assert_eq!(config.request_timeout, 30);
}
