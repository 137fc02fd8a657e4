use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timetable/expand",
            post(handlers::timetable::expand_schedule),
        )
        .route(
            "/api/timetable/occurrences",
            post(handlers::timetable::list_occurrences),
        )
        .route(
            "/api/timetable/conflicts",
            post(handlers::timetable::find_conflicts),
        )
}
