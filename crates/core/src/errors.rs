use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// What is wrong with a misconfigured schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConfigurationIssue {
    #[error("end date {end} is before start date {start}")]
    EndsBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("start time {start} is not before end time {end}")]
    EmptyTimeWindow { start: NaiveTime, end: NaiveTime },

    #[error("weekly recurrence requires a day of week")]
    MissingDayOfWeek,
}

/// A schedule that cannot be expanded.
///
/// Carries the offending schedule's id so batch callers can report the
/// failure next to the schedule it belongs to.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("Schedule {schedule_id} is misconfigured: {issue}")]
pub struct ScheduleConfigurationError {
    pub schedule_id: Uuid,
    pub issue: ConfigurationIssue,
}

#[derive(Error, Debug)]
pub enum SchoolError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ScheduleConfigurationError),
}

pub type SchoolResult<T> = Result<T, SchoolError>;
