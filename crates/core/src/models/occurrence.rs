use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::Schedule;

/// An identifier an occurrence holds exclusively for its time window.
///
/// Ordered by kind, then id, so grouped output stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum ResourceKey {
    Room(String),
    Teacher(String),
    Class(String),
}

/// One concrete calendar instance of a schedule. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub schedule_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub resource_keys: BTreeSet<ResourceKey>,
}

impl Occurrence {
    pub(crate) fn of(schedule: &Schedule, date: NaiveDate) -> Self {
        Self {
            schedule_id: schedule.id,
            date,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            location: schedule.location.clone(),
            resource_keys: resource_keys(schedule),
        }
    }

    /// Half-open interval intersection on the same date.
    pub fn overlaps(&self, other: &Occurrence) -> bool {
        self.date == other.date
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}

fn resource_keys(schedule: &Schedule) -> BTreeSet<ResourceKey> {
    let mut keys = BTreeSet::new();

    let room = schedule.location.trim();
    if !room.is_empty() {
        keys.insert(ResourceKey::Room(room.to_string()));
    }
    if let Some(teacher_id) = &schedule.teacher_id {
        keys.insert(ResourceKey::Teacher(teacher_id.clone()));
    }
    if let Some(class_id) = &schedule.class_id {
        keys.insert(ResourceKey::Class(class_id.clone()));
    }

    keys
}

/// Two occurrences competing for at least one resource on the same date.
///
/// `first` and `second` are normalized so the pair reads the same no matter
/// which order the schedules were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictPair {
    pub first: Uuid,
    pub second: Uuid,
    pub date: NaiveDate,
    pub shared_resources: Vec<ResourceKey>,
    pub overlap_start: NaiveTime,
    pub overlap_end: NaiveTime,
}
