//! Route definitions for the `/enroll` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enroll`.
///
/// ```text
/// POST /              -> enroll (student)
/// GET  /my-courses    -> my_enrollments (student)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(enrollment::enroll))
        .route("/my-courses", get(enrollment::my_enrollments))
}
