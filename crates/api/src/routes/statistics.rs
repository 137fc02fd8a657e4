use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/statistics/attendance",
            post(handlers::statistics::attendance_statistics),
        )
        .route(
            "/api/statistics/results",
            post(handlers::statistics::results_statistics),
        )
}
