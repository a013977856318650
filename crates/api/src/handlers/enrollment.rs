//! Handlers for enrollment and the progress ratchet.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use startovate_core::error::CoreError;
use startovate_core::types::DbId;
use startovate_db::models::enrollment::{EnrolledCourse, Enrollment};
use startovate_db::repositories::{CourseRepo, EnrollmentRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStudent;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /enroll`.
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub course_id: DbId,
}

/// Request body for `PUT /courses/progress`.
#[derive(Debug, Deserialize, Validate)]
pub struct ProgressRequest {
    pub course_id: DbId,
    /// The overall percentage the client has observed, in [0, 100].
    #[validate(range(min = 0, max = 100, message = "progress must be between 0 and 100"))]
    pub progress: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/enroll
///
/// Uniqueness-gated create: at most one enrollment per (student, course).
pub async fn enroll(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Json(input): Json<EnrollRequest>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    let course = CourseRepo::find_by_id(&state.pool, input.course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: input.course_id,
        }))?;

    let existing =
        EnrollmentRepo::find_by_student_and_course(&state.pool, student.user_id, course.id).await?;
    if existing.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Already enrolled in this course".into(),
        )));
    }

    let enrollment = EnrollmentRepo::create(&state.pool, student.user_id, course.id).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /api/enroll/my-courses
pub async fn my_enrollments(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
) -> AppResult<Json<Vec<EnrolledCourse>>> {
    let enrollments = EnrollmentRepo::list_for_student(&state.pool, student.user_id).await?;
    Ok(Json(enrollments))
}

/// PUT /api/courses/progress
///
/// Monotonic progress update for the acting student's enrollment. The store
/// applies `max(stored, observed)` atomically, so stale or out-of-order
/// reports are successful no-ops and `completed` latches once progress
/// reaches 100.
pub async fn update_progress(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Json(input): Json<ProgressRequest>,
) -> AppResult<Json<Enrollment>> {
    input.validate()?;

    let enrollment =
        EnrollmentRepo::apply_progress(&state.pool, student.user_id, input.course_id, input.progress)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Enrollment",
                id: input.course_id,
            }))?;

    Ok(Json(enrollment))
}
