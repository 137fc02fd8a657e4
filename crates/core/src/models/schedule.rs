use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ConfigurationIssue, ScheduleConfigurationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    Class,
    Teacher,
    Student,
    Exam,
    Event,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Weekly,
}

/// A one-off event or a weekly time block, as stored by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub day_of_week: Option<Weekday>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub class_id: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
}

impl Schedule {
    /// Checks the invariants every expandable schedule must hold.
    pub fn validate(&self) -> Result<(), ScheduleConfigurationError> {
        let issue = if self.end_date < self.start_date {
            Some(ConfigurationIssue::EndsBeforeStart {
                start: self.start_date,
                end: self.end_date,
            })
        } else if self.start_time >= self.end_time {
            Some(ConfigurationIssue::EmptyTimeWindow {
                start: self.start_time,
                end: self.end_time,
            })
        } else if self.recurrence != Recurrence::None && self.day_of_week.is_none() {
            Some(ConfigurationIssue::MissingDayOfWeek)
        } else {
            None
        };

        match issue {
            Some(issue) => Err(ScheduleConfigurationError {
                schedule_id: self.id,
                issue,
            }),
            None => Ok(()),
        }
    }
}

/// Narrows a set of schedules down to one timetable view.
///
/// Every field that is set must match; an empty filter keeps all schedules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableFilter {
    #[serde(default)]
    pub kind: Option<ScheduleKind>,
    #[serde(default)]
    pub class_id: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
}

impl TimetableFilter {
    pub fn matches(&self, schedule: &Schedule) -> bool {
        fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
            match wanted {
                Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
                None => true,
            }
        }

        self.kind.is_none_or(|kind| kind == schedule.kind)
            && field_matches(&self.class_id, &schedule.class_id)
            && field_matches(&self.teacher_id, &schedule.teacher_id)
            && field_matches(&self.student_id, &schedule.student_id)
    }
}
