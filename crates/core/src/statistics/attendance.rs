use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ratio;
use crate::models::attendance::{AttendanceRecord, AttendanceScope, AttendanceStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
}

impl StatusCounts {
    fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Excused => self.excused += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.late + self.excused
    }

    pub fn attended(&self) -> usize {
        self.present + self.late
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendance {
    pub date: NaiveDate,
    pub total: usize,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAttendance {
    pub class_id: String,
    pub total: usize,
    pub sessions: usize,
    pub attended: usize,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendance {
    pub student_id: String,
    pub total_sessions: usize,
    pub attended: usize,
    pub attendance_rate: f64,
}

/// Attendance summary for one scope. Rates are fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatistics {
    pub total_records: usize,
    pub total_sessions: usize,
    pub total_students: usize,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub present_rate: f64,
    pub absent_rate: f64,
    pub late_rate: f64,
    pub excused_rate: f64,
    pub attendance_rate: f64,
    pub daily_stats: Vec<DailyAttendance>,
    pub class_stats: Vec<ClassAttendance>,
    pub student_stats: Vec<StudentAttendance>,
}

#[derive(Default)]
struct ClassTally {
    counts: StatusCounts,
    dates: HashSet<NaiveDate>,
}

/// Reduces the records that fall inside `scope` to attendance statistics.
///
/// Duplicate marks for the same student, class and date are counted as
/// separate records.
pub fn aggregate_attendance(
    records: &[AttendanceRecord],
    scope: &AttendanceScope,
) -> AttendanceStatistics {
    let mut counts = StatusCounts::default();
    let mut sessions: HashSet<(&str, NaiveDate)> = HashSet::new();
    let mut daily: BTreeMap<NaiveDate, StatusCounts> = BTreeMap::new();
    let mut classes: BTreeMap<&str, ClassTally> = BTreeMap::new();
    let mut students: BTreeMap<&str, StatusCounts> = BTreeMap::new();

    for record in records.iter().filter(|record| scope.contains(record)) {
        counts.record(record.status);
        sessions.insert((record.class_id.as_str(), record.date));
        daily.entry(record.date).or_default().record(record.status);

        let class = classes.entry(record.class_id.as_str()).or_default();
        class.counts.record(record.status);
        class.dates.insert(record.date);

        students
            .entry(record.student_id.as_str())
            .or_default()
            .record(record.status);
    }

    let total_records = counts.total();
    debug!(
        "Aggregating attendance: records={}, in_scope={}",
        records.len(),
        total_records
    );

    let daily_stats = daily
        .into_iter()
        .map(|(date, counts)| DailyAttendance {
            date,
            total: counts.total(),
            counts,
            attendance_rate: ratio(counts.attended(), counts.total()),
        })
        .collect();

    let class_stats = classes
        .into_iter()
        .map(|(class_id, tally)| ClassAttendance {
            class_id: class_id.to_string(),
            total: tally.counts.total(),
            sessions: tally.dates.len(),
            attended: tally.counts.attended(),
            attendance_rate: ratio(tally.counts.attended(), tally.counts.total()),
        })
        .collect();

    let total_students = students.len();
    let student_stats = students
        .into_iter()
        .map(|(student_id, counts)| StudentAttendance {
            student_id: student_id.to_string(),
            total_sessions: counts.total(),
            attended: counts.attended(),
            attendance_rate: ratio(counts.attended(), counts.total()),
        })
        .collect();

    AttendanceStatistics {
        total_records,
        total_sessions: sessions.len(),
        total_students,
        counts,
        present_rate: ratio(counts.present, total_records),
        absent_rate: ratio(counts.absent, total_records),
        late_rate: ratio(counts.late, total_records),
        excused_rate: ratio(counts.excused, total_records),
        attendance_rate: ratio(counts.attended(), total_records),
        daily_stats,
        class_stats,
        student_stats,
    }
}
