//! # Conflict Detection
//!
//! Finds occurrences that compete for the same room, teacher or class at the
//! same time. Detection only: conflicting schedules are reported, never
//! rejected, and whether a conflict blocks a save is left to the caller.
//!
//! ## Algorithm
//!
//! 1. Expand every schedule over the query range, setting misconfigured ones aside
//! 2. Bucket occurrences by `(date, resource key)`
//! 3. Sort each bucket by start time and sweep it, comparing an occurrence only
//!    with the ones that start before it ends
//! 4. Merge pairs found through several shared resources into one report
//!
//! Unrelated resources are never compared, so the quadratic worst case only
//! applies within a single busy room, teacher or class on a single day.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::ScheduleConfigurationError,
    models::{
        occurrence::{ConflictPair, Occurrence, ResourceKey},
        schedule::Schedule,
    },
    recurrence::expand_all,
};

/// Conflicts between valid schedules, plus the schedules that could not be
/// expanded at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub conflicts: Vec<ConflictPair>,
    pub rejected: Vec<ScheduleConfigurationError>,
}

pub fn find_conflicts(
    schedules: &[Schedule],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> ConflictReport {
    let expansion = expand_all(schedules, range_start, range_end);
    let occurrences = &expansion.occurrences;

    let mut buckets: HashMap<(NaiveDate, &ResourceKey), Vec<usize>> = HashMap::new();
    for (index, occurrence) in occurrences.iter().enumerate() {
        for key in &occurrence.resource_keys {
            buckets.entry((occurrence.date, key)).or_default().push(index);
        }
    }

    // (lower index, higher index) -> every resource the pair shares
    let mut pairs: BTreeMap<(usize, usize), BTreeSet<ResourceKey>> = BTreeMap::new();
    for ((_, key), mut bucket) in buckets {
        if bucket.len() < 2 {
            continue;
        }
        bucket.sort_by_key(|&index| occurrences[index].start_time);

        for (position, &a) in bucket.iter().enumerate() {
            for &b in &bucket[position + 1..] {
                if occurrences[b].start_time >= occurrences[a].end_time {
                    break;
                }
                if occurrences[a].overlaps(&occurrences[b]) {
                    pairs
                        .entry((a.min(b), a.max(b)))
                        .or_default()
                        .insert(key.clone());
                }
            }
        }
    }

    let mut conflicts: Vec<ConflictPair> = pairs
        .into_iter()
        .map(|((a, b), shared)| conflict_pair(&occurrences[a], &occurrences[b], shared))
        .collect();
    conflicts.sort_by(|x, y| {
        (x.date, x.overlap_start, x.first, x.second).cmp(&(y.date, y.overlap_start, y.first, y.second))
    });

    debug!(
        "Checked {} occurrences for conflicts: conflicts={}",
        occurrences.len(),
        conflicts.len()
    );

    ConflictReport {
        conflicts,
        rejected: expansion.rejected,
    }
}

fn conflict_pair(a: &Occurrence, b: &Occurrence, shared: BTreeSet<ResourceKey>) -> ConflictPair {
    let (first, second) = if (a.schedule_id, a.start_time) <= (b.schedule_id, b.start_time) {
        (a, b)
    } else {
        (b, a)
    };

    ConflictPair {
        first: first.schedule_id,
        second: second.schedule_id,
        date: first.date,
        shared_resources: shared.into_iter().collect(),
        overlap_start: first.start_time.max(second.start_time),
        overlap_end: first.end_time.min(second.end_time),
    }
}
