//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use schoolhub_core::errors::{ScheduleConfigurationError, SchoolError};
use tracing::debug;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `SchoolError` and implements `IntoResponse`, so handlers
/// can use `?` on anything that converts into a `SchoolError`.
#[derive(Debug)]
pub struct AppError(pub SchoolError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SchoolError::Validation(_) => StatusCode::BAD_REQUEST,
            SchoolError::Configuration(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let message = self.0.to_string();
        debug!(status = %status, "Request failed: {}", message);

        let body = match &self.0 {
            SchoolError::Configuration(err) => Json(json!({ "error": message, "details": err })),
            SchoolError::Validation(_) => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

impl From<SchoolError> for AppError {
    fn from(err: SchoolError) -> Self {
        AppError(err)
    }
}

impl From<ScheduleConfigurationError> for AppError {
    fn from(err: ScheduleConfigurationError) -> Self {
        AppError(SchoolError::Configuration(err))
    }
}

/// Maps a SchoolError to an HTTP response
pub fn map_error(err: SchoolError) -> Response {
    AppError(err).into_response()
}
