//! # Timetable Handlers
//!
//! Expose the recurrence resolver and conflict detection. Callers post the
//! schedules they already hold together with the query range; nothing is
//! read from or written to storage here.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use schoolhub_core::{
    errors::SchoolError,
    models::{
        occurrence::Occurrence,
        schedule::{Schedule, TimetableFilter},
    },
    ConflictReport, Expansion,
};
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandScheduleRequest {
    pub schedule: Schedule,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandScheduleResponse {
    pub occurrences: Vec<Occurrence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    pub schedules: Vec<Schedule>,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    #[serde(default)]
    pub filter: TimetableFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictsRequest {
    pub schedules: Vec<Schedule>,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
}

/// Rejects reversed ranges and ranges longer than the configured maximum.
fn check_range(state: &ApiState, start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if end < start {
        return Err(AppError(SchoolError::Validation(format!(
            "rangeEnd {} is before rangeStart {}",
            end, start
        ))));
    }

    let days = (end - start).num_days() + 1;
    if days > state.max_range_days {
        return Err(AppError(SchoolError::Validation(format!(
            "Range of {} days exceeds the maximum of {} days",
            days, state.max_range_days
        ))));
    }

    Ok(())
}

/// Expands a single schedule
///
/// # Endpoint
///
/// ```text
/// POST /api/timetable/expand
/// ```
///
/// # Errors
///
/// * `SchoolError::Validation` - Reversed or oversized range
/// * `SchoolError::Configuration` - The schedule itself is misconfigured
#[axum::debug_handler]
pub async fn expand_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ExpandScheduleRequest>,
) -> Result<Json<ExpandScheduleResponse>, AppError> {
    check_range(&state, payload.range_start, payload.range_end)?;

    let occurrences =
        schoolhub_core::expand(&payload.schedule, payload.range_start, payload.range_end)?
            .collect();

    Ok(Json(ExpandScheduleResponse { occurrences }))
}

/// Builds a timetable from a batch of schedules
///
/// # Endpoint
///
/// ```text
/// POST /api/timetable/occurrences
/// ```
///
/// Misconfigured schedules are returned in `rejected` rather than failing the
/// whole request.
#[axum::debug_handler]
pub async fn list_occurrences(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<TimetableRequest>,
) -> Result<Json<Expansion>, AppError> {
    check_range(&state, payload.range_start, payload.range_end)?;

    let expansion = schoolhub_core::timetable(
        &payload.schedules,
        &payload.filter,
        payload.range_start,
        payload.range_end,
    );

    Ok(Json(expansion))
}

/// Detects resource conflicts between schedules
///
/// # Endpoint
///
/// ```text
/// POST /api/timetable/conflicts
/// ```
#[axum::debug_handler]
pub async fn find_conflicts(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ConflictsRequest>,
) -> Result<Json<ConflictReport>, AppError> {
    check_range(&state, payload.range_start, payload.range_end)?;

    let report =
        schoolhub_core::find_conflicts(&payload.schedules, payload.range_start, payload.range_end);

    if !report.conflicts.is_empty() {
        info!(
            "Found {} conflicts among {} schedules",
            report.conflicts.len(),
            payload.schedules.len()
        );
    }

    Ok(Json(report))
}
