use chrono::{NaiveDate, NaiveTime};
use schoolhub_core::errors::{
    ConfigurationIssue, ScheduleConfigurationError, SchoolError, SchoolResult,
};
use std::error::Error;
use uuid::Uuid;

fn misconfigured(issue: ConfigurationIssue) -> ScheduleConfigurationError {
    ScheduleConfigurationError {
        schedule_id: Uuid::nil(),
        issue,
    }
}

#[test]
fn test_configuration_error_display() {
    let ends_early = misconfigured(ConfigurationIssue::EndsBeforeStart {
        start: NaiveDate::from_ymd_opt(2024, 9, 10).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
    });
    let empty_window = misconfigured(ConfigurationIssue::EmptyTimeWindow {
        start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    });
    let missing_day = misconfigured(ConfigurationIssue::MissingDayOfWeek);

    assert_eq!(
        ends_early.to_string(),
        "Schedule 00000000-0000-0000-0000-000000000000 is misconfigured: \
         end date 2024-09-01 is before start date 2024-09-10"
    );
    assert!(empty_window
        .to_string()
        .ends_with("start time 10:00:00 is not before end time 09:00:00"));
    assert!(missing_day
        .to_string()
        .ends_with("weekly recurrence requires a day of week"));
}

#[test]
fn test_school_error_display() {
    let validation = SchoolError::Validation("Invalid range".to_string());
    let configuration = SchoolError::from(misconfigured(ConfigurationIssue::MissingDayOfWeek));

    assert_eq!(validation.to_string(), "Validation error: Invalid range");
    assert!(configuration.to_string().starts_with("Configuration error: Schedule"));
}

#[test]
fn test_configuration_error_is_source() {
    let error = SchoolError::Configuration(misconfigured(ConfigurationIssue::MissingDayOfWeek));

    assert!(error.source().is_some());
}

#[test]
fn test_school_result() {
    let result: SchoolResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: SchoolResult<i32> = Err(SchoolError::Validation("Bad".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_configuration_error_serialization() {
    let error = misconfigured(ConfigurationIssue::MissingDayOfWeek);

    let json = serde_json::to_value(&error).expect("Failed to serialize configuration error");

    assert_eq!(json["scheduleId"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(json["issue"]["kind"], "missingDayOfWeek");
}
