use axum::Json;
use serde::{Deserialize, Serialize};
use schoolhub_core::{
    errors::SchoolError,
    models::{
        assignment::AssignmentResult,
        attendance::{AttendanceRecord, AttendanceScope},
    },
    statistics::{AttendanceStatistics, ResultsStatistics},
};

use crate::middleware::error_handling::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatisticsRequest {
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub scope: AttendanceScope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsStatisticsRequest {
    pub results: Vec<AssignmentResult>,
    pub max_grade: f64,
}

/// `POST /api/statistics/attendance`
pub async fn attendance_statistics(
    Json(payload): Json<AttendanceStatisticsRequest>,
) -> Json<AttendanceStatistics> {
    Json(schoolhub_core::aggregate_attendance(
        &payload.records,
        &payload.scope,
    ))
}

/// `POST /api/statistics/results`
///
/// A zero maximum grade is fine (no percentages are reported); a negative or
/// non-finite one is a malformed request.
pub async fn results_statistics(
    Json(payload): Json<ResultsStatisticsRequest>,
) -> Result<Json<ResultsStatistics>, AppError> {
    if !payload.max_grade.is_finite() || payload.max_grade < 0.0 {
        return Err(AppError(SchoolError::Validation(format!(
            "maxGrade must be a non-negative number, got {}",
            payload.max_grade
        ))));
    }

    Ok(Json(schoolhub_core::aggregate_results(
        &payload.results,
        payload.max_grade,
    )))
}
