//! Route definitions for the `/courses` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{course, enrollment};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// POST   /                      -> create (teacher)
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update (teacher, owner)
/// DELETE /{id}                  -> delete (teacher, owner)
/// GET    /teacher/my-courses    -> my_courses (teacher)
/// GET    /student/approved      -> approved
/// PUT    /approve/{id}          -> approve (superadmin)
/// PUT    /progress              -> update_progress (student)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(course::create))
        .route(
            "/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .route("/teacher/my-courses", get(course::my_courses))
        .route("/student/approved", get(course::approved))
        .route("/approve/{id}", put(course::approve))
        .route("/progress", put(enrollment::update_progress))
}
