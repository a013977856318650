//! Handlers for the `/courses` resource.
//!
//! Courses are owned by their instructor. Every mutating call runs the
//! same three-part contract: role gate (extractor), lookup (404 on a
//! missing id), ownership gate (403 on mismatch), then the single write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use startovate_core::error::CoreError;
use startovate_core::ownership::ensure_owner;
use startovate_core::types::DbId;
use startovate_db::models::course::{Chapter, Course, CreateCourse, UpdateCourse};
use startovate_db::repositories::CourseRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireSuperadmin, RequireTeacher};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /courses`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub videos: Vec<Chapter>,
}

impl From<CreateCourseRequest> for CreateCourse {
    fn from(input: CreateCourseRequest) -> Self {
        CreateCourse {
            title: input.title,
            description: input.description,
            price: input.price,
            category: input.category,
            videos: input.videos,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/courses
///
/// Create a course owned by the acting teacher. `is_approved` starts false;
/// the course only enters the student catalog after superadmin approval.
pub async fn create(
    State(state): State<AppState>,
    RequireTeacher(teacher): RequireTeacher,
    Json(input): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<Course>)> {
    input.validate()?;
    let course = CourseRepo::create(&state.pool, teacher.user_id, &input.into()).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/courses/teacher/my-courses
pub async fn my_courses(
    State(state): State<AppState>,
    RequireTeacher(teacher): RequireTeacher,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list_by_instructor(&state.pool, teacher.user_id).await?;
    Ok(Json(courses))
}

/// GET /api/courses/student/approved
///
/// The student-facing catalog: approved courses only.
pub async fn approved(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list_approved(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}

/// PUT /api/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireTeacher(teacher): RequireTeacher,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    ensure_owner(teacher.user_id, &course)?;

    let updated = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireTeacher(teacher): RequireTeacher,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    ensure_owner(teacher.user_id, &course)?;

    CourseRepo::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::ok("Course deleted successfully")))
}

/// PUT /api/courses/approve/{id}
///
/// Superadmin approval: a single-field flip with no cascading effects.
/// Idempotent -- approving an already-approved course succeeds unchanged.
pub async fn approve(
    State(state): State<AppState>,
    RequireSuperadmin(_admin): RequireSuperadmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::approve(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}
