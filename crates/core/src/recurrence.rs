//! # Recurrence Resolver
//!
//! Turns schedule definitions into the concrete calendar occurrences a
//! timetable shows. Nothing here is stored: every call recomputes the
//! occurrences for the requested range from the schedules it is handed.
//!
//! A one-off schedule occupies its `start_date` only. A weekly schedule
//! occupies every date in `[start_date, end_date]` that falls on its
//! `day_of_week`. Both are clipped to the closed query range.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::ScheduleConfigurationError,
    models::{
        occurrence::Occurrence,
        schedule::{Recurrence, Schedule, TimetableFilter},
    },
};

/// Lazy occurrences of a single schedule inside a query range.
///
/// Cloning restarts the sequence from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    schedule: &'a Schedule,
    next: Option<NaiveDate>,
    last: NaiveDate,
    step: Option<Days>,
}

impl<'a> Occurrences<'a> {
    fn empty(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            next: None,
            last: schedule.start_date,
            step: None,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        let date = self.next.filter(|date| *date <= self.last)?;
        self.next = self.step.and_then(|step| date.checked_add_days(step));
        Some(Occurrence::of(self.schedule, date))
    }
}

/// Expands one schedule into its occurrences within `[range_start, range_end]`.
///
/// An empty intersection, including a reversed query range, yields an empty
/// sequence. A misconfigured schedule is rejected before anything is yielded.
pub fn expand(
    schedule: &Schedule,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Result<Occurrences<'_>, ScheduleConfigurationError> {
    schedule.validate()?;

    let first = schedule.start_date.max(range_start);
    let last = schedule.end_date.min(range_end);
    if first > last {
        return Ok(Occurrences::empty(schedule));
    }

    let occurrences = match (schedule.recurrence, schedule.day_of_week) {
        (Recurrence::None, _) => Occurrences {
            schedule,
            next: (schedule.start_date >= first).then_some(schedule.start_date),
            last,
            step: None,
        },
        (Recurrence::Weekly, Some(weekday)) => {
            let offset = (7 + weekday.num_days_from_monday()
                - first.weekday().num_days_from_monday())
                % 7;
            Occurrences {
                schedule,
                next: first.checked_add_days(Days::new(u64::from(offset))),
                last,
                step: Some(Days::new(7)),
            }
        }
        // validate() rejects weekly schedules without a weekday
        (Recurrence::Weekly, None) => Occurrences::empty(schedule),
    };

    Ok(occurrences)
}

/// The outcome of expanding a batch of schedules.
///
/// Misconfigured schedules land in `rejected`; the rest still expand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expansion {
    pub occurrences: Vec<Occurrence>,
    pub rejected: Vec<ScheduleConfigurationError>,
}

/// Expands every schedule, ordering occurrences by date, start time and
/// schedule id.
pub fn expand_all<'a, I>(schedules: I, range_start: NaiveDate, range_end: NaiveDate) -> Expansion
where
    I: IntoIterator<Item = &'a Schedule>,
{
    let mut expansion = Expansion::default();

    for schedule in schedules {
        match expand(schedule, range_start, range_end) {
            Ok(occurrences) => expansion.occurrences.extend(occurrences),
            Err(err) => {
                warn!(schedule_id = %schedule.id, "Skipping schedule: {}", err);
                expansion.rejected.push(err);
            }
        }
    }

    expansion.occurrences.sort_by(|a, b| {
        (a.date, a.start_time, a.schedule_id).cmp(&(b.date, b.start_time, b.schedule_id))
    });

    debug!(
        "Expanded schedules between {} and {}: occurrences={}, rejected={}",
        range_start,
        range_end,
        expansion.occurrences.len(),
        expansion.rejected.len()
    );

    expansion
}

/// Builds the timetable of one class, teacher, student or schedule type.
pub fn timetable(
    schedules: &[Schedule],
    filter: &TimetableFilter,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Expansion {
    expand_all(
        schedules.iter().filter(|schedule| filter.matches(schedule)),
        range_start,
        range_end,
    )
}
