use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ratio;
use crate::models::assignment::{AssignmentResult, ResultStatus};

/// Summary of one assignment's results.
///
/// The grade figures are `None` until at least one result is graded; the
/// presentation layer shows that as "No grades yet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsStatistics {
    pub total_students: usize,
    pub graded_count: usize,
    pub pending_count: usize,
    pub absent_count: usize,
    pub average_grade: Option<f64>,
    pub average_percentage: Option<f64>,
    pub highest_grade: Option<f64>,
    pub lowest_grade: Option<f64>,
    pub median_grade: Option<f64>,
    pub grading_progress: f64,
}

/// Reduces assignment results to a flat summary, with percentages taken
/// against `max_grade`.
///
/// A result marked graded but carrying no usable grade counts as pending.
pub fn aggregate_results(results: &[AssignmentResult], max_grade: f64) -> ResultsStatistics {
    let mut grades: Vec<f64> = Vec::with_capacity(results.len());
    let mut pending_count = 0;
    let mut absent_count = 0;

    for result in results {
        match (result.status, result.graded_value()) {
            (ResultStatus::Graded, Some(grade)) => grades.push(grade),
            (ResultStatus::Graded, None) => {
                debug!(
                    "Result for student {} is graded without a grade; counting as pending",
                    result.student_id
                );
                pending_count += 1;
            }
            (ResultStatus::Pending, _) => pending_count += 1,
            (ResultStatus::Absent, _) => absent_count += 1,
        }
    }

    let graded_count = grades.len();
    let total_students = graded_count + pending_count + absent_count;

    let average_grade = mean(&grades);
    let average_percentage = average_grade
        .filter(|_| max_grade > 0.0)
        .map(|average| average * 100.0 / max_grade);

    grades.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    ResultsStatistics {
        total_students,
        graded_count,
        pending_count,
        absent_count,
        average_grade,
        average_percentage,
        highest_grade: grades.last().copied(),
        lowest_grade: grades.first().copied(),
        median_grade: median(&grades),
        grading_progress: ratio(graded_count, total_students),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of already sorted values.
fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(sorted[n / 2]),
        _ => Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0),
    }
}
