//! Route definitions for the `/feedback` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// POST   /           -> submit (student, enrolled in course)
/// GET    /my         -> my_feedback (student)
/// GET    /teacher    -> teacher_feedback (teacher, with averages)
/// PUT    /{id}       -> update (student, owner)
/// DELETE /{id}       -> delete (student, owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(feedback::submit))
        .route("/my", get(feedback::my_feedback))
        .route("/teacher", get(feedback::teacher_feedback))
        .route("/{id}", put(feedback::update).delete(feedback::delete))
}
