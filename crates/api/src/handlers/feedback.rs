//! Handlers for the `/feedback` resource.
//!
//! Feedback is owned by the submitting student and denormalizes the
//! course's instructor at submission time. Submission requires an active
//! enrollment; one feedback per (student, course).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use startovate_core::error::CoreError;
use startovate_core::ownership::ensure_owner;
use startovate_core::types::DbId;
use startovate_db::models::feedback::{CourseRatingSummary, Feedback, FeedbackWithContext};
use startovate_db::repositories::{CourseRepo, EnrollmentRepo, FeedbackRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireStudent, RequireTeacher};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /feedback`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    pub course_id: DbId,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, max = 1000, message = "comment must be 1-1000 characters"))]
    pub comment: String,
}

/// Request body for `PUT /feedback/{id}`. Only provided fields are applied.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFeedbackRequest {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(min = 1, max = 1000, message = "comment must be 1-1000 characters"))]
    pub comment: Option<String>,
}

/// Response for the teacher view: individual entries plus per-course
/// rating aggregates.
#[derive(Debug, Serialize)]
pub struct TeacherFeedbackResponse {
    pub feedback: Vec<FeedbackWithContext>,
    pub courses: Vec<CourseRatingSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/feedback
///
/// Validation is a hard precondition: an out-of-range rating never reaches
/// the store.
pub async fn submit(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Json(input): Json<SubmitFeedbackRequest>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    input.validate()?;

    let course = CourseRepo::find_by_id(&state.pool, input.course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: input.course_id,
        }))?;

    let enrollment =
        EnrollmentRepo::find_by_student_and_course(&state.pool, student.user_id, course.id).await?;
    if enrollment.is_none() {
        return Err(AppError::Core(CoreError::Forbidden(
            "You must be enrolled in this course to submit feedback".into(),
        )));
    }

    let existing =
        FeedbackRepo::find_by_student_and_course(&state.pool, student.user_id, course.id).await?;
    if existing.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already submitted feedback for this course".into(),
        )));
    }

    // Denormalize the instructor from the course at submission time.
    let feedback = FeedbackRepo::create(
        &state.pool,
        student.user_id,
        course.id,
        course.instructor_id,
        input.rating,
        &input.comment,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/feedback/my
pub async fn my_feedback(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list_by_student(&state.pool, student.user_id).await?;
    Ok(Json(feedback))
}

/// GET /api/feedback/teacher
///
/// All feedback left on the acting teacher's courses, with per-course
/// average ratings.
pub async fn teacher_feedback(
    State(state): State<AppState>,
    RequireTeacher(teacher): RequireTeacher,
) -> AppResult<Json<TeacherFeedbackResponse>> {
    let feedback = FeedbackRepo::list_by_instructor(&state.pool, teacher.user_id).await?;
    let courses = FeedbackRepo::course_averages(&state.pool, teacher.user_id).await?;
    Ok(Json(TeacherFeedbackResponse { feedback, courses }))
}

/// PUT /api/feedback/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedbackRequest>,
) -> AppResult<Json<Feedback>> {
    input.validate()?;

    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    ensure_owner(student.user_id, &feedback)?;

    let updated = FeedbackRepo::update(&state.pool, id, input.rating, input.comment.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/feedback/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;
    ensure_owner(student.user_id, &feedback)?;

    FeedbackRepo::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::ok("Feedback deleted successfully")))
}
