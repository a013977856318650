//! Handlers for the `/canvas` resource. At most one canvas per user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use startovate_core::error::CoreError;
use startovate_core::ownership::ensure_owner;
use startovate_core::types::DbId;
use startovate_db::models::canvas::{Canvas, CreateCanvas, UpdateCanvas};
use startovate_db::repositories::CanvasRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /canvas`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCanvasRequest {
    #[validate(length(min = 1, max = 300, message = "research_title must be 1-300 characters"))]
    pub research_title: String,
    #[validate(length(min = 1, max = 100, message = "author_name must be 1-100 characters"))]
    pub author_name: String,
    pub idea_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/canvas
///
/// Uniqueness-gated create: a user has at most one canvas.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCanvasRequest>,
) -> AppResult<(StatusCode, Json<Canvas>)> {
    input.validate()?;

    if CanvasRepo::find_by_owner(&state.pool, user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You already have a canvas".into(),
        )));
    }

    let canvas = CanvasRepo::create(
        &state.pool,
        user.user_id,
        &CreateCanvas {
            research_title: input.research_title,
            author_name: input.author_name,
            idea_description: input.idea_description,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(canvas)))
}

/// GET /api/canvas
///
/// The acting user's canvas.
pub async fn mine(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Canvas>> {
    let canvas = CanvasRepo::find_by_owner(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Canvas",
            id: user.user_id,
        }))?;
    Ok(Json(canvas))
}

/// PUT /api/canvas/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCanvas>,
) -> AppResult<Json<Canvas>> {
    let canvas = CanvasRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Canvas",
            id,
        }))?;
    ensure_owner(user.user_id, &canvas)?;

    let updated = CanvasRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Canvas",
            id,
        }))?;
    Ok(Json(updated))
}
