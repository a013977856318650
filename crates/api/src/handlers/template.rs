//! Handlers for the `/templates` resource.
//!
//! A template is unique per (canvas, template_key). "Start" is a lazy
//! get-or-create; "save" shallow-merges new answers into the stored content.
//! All access is gated through ownership of the parent canvas.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use startovate_core::error::CoreError;
use startovate_core::ownership::ensure_owner;
use startovate_core::stepkey::parse_template_key;
use startovate_core::types::DbId;
use startovate_db::models::canvas::Canvas;
use startovate_db::models::template::{SaveTemplate, StartTemplate, Template};
use startovate_db::repositories::{CanvasRepo, TemplateRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/templates/start
///
/// Lazy creation: returns the existing template for (canvas, key) when one
/// exists, otherwise creates it with empty content. The component name is
/// derived from the key, so a malformed key fails before any write.
pub async fn start(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<StartTemplate>,
) -> AppResult<(StatusCode, Json<Template>)> {
    let step = parse_template_key(&input.template_key)?;
    owned_canvas(&state, user.user_id, input.canvas_id).await?;

    if let Some(existing) =
        TemplateRepo::find_by_canvas_and_key(&state.pool, input.canvas_id, &input.template_key)
            .await?
    {
        return Ok((StatusCode::OK, Json(existing)));
    }

    let template = TemplateRepo::create(
        &state.pool,
        input.canvas_id,
        &input.template_key,
        &step.component_name,
        &input.checklist_step,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// PUT /api/templates/save
///
/// Partial save: new answers shallow-merge into the stored content map,
/// never replacing it wholesale.
pub async fn save(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SaveTemplate>,
) -> AppResult<Json<Template>> {
    owned_canvas(&state, user.user_id, input.canvas_id).await?;

    let template =
        TemplateRepo::find_by_canvas_and_key(&state.pool, input.canvas_id, &input.template_key)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "Template '{}' has not been started for this canvas",
                    input.template_key
                )))
            })?;

    let updated = TemplateRepo::merge_content(&state.pool, template.id, &input.content, input.completed)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template.id,
        }))?;

    Ok(Json(updated))
}

/// GET /api/templates/{canvas_id}
pub async fn list_by_canvas(
    State(state): State<AppState>,
    user: AuthUser,
    Path(canvas_id): Path<DbId>,
) -> AppResult<Json<Vec<Template>>> {
    owned_canvas(&state, user.user_id, canvas_id).await?;
    let templates = TemplateRepo::list_by_canvas(&state.pool, canvas_id).await?;
    Ok(Json(templates))
}

/// GET /api/templates/{canvas_id}/{template_key}
pub async fn get_by_key(
    State(state): State<AppState>,
    user: AuthUser,
    Path((canvas_id, template_key)): Path<(DbId, String)>,
) -> AppResult<Json<Template>> {
    owned_canvas(&state, user.user_id, canvas_id).await?;

    let template = TemplateRepo::find_by_canvas_and_key(&state.pool, canvas_id, &template_key)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: canvas_id,
        }))?;
    Ok(Json(template))
}

/// Look up a canvas and verify the actor owns it.
async fn owned_canvas(state: &AppState, actor_id: DbId, canvas_id: DbId) -> AppResult<Canvas> {
    let canvas = CanvasRepo::find_by_id(&state.pool, canvas_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Canvas",
            id: canvas_id,
        }))?;
    ensure_owner(actor_id, &canvas)?;
    Ok(canvas)
}
