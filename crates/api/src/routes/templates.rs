//! Route definitions for the `/templates` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::template;
use crate::state::AppState;

/// Routes mounted at `/templates`.
///
/// ```text
/// POST /start                         -> start (lazy create)
/// PUT  /save                          -> save (shallow-merge)
/// GET  /{canvas_id}                   -> list_by_canvas
/// GET  /{canvas_id}/{template_key}    -> get_by_key
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(template::start))
        .route("/save", put(template::save))
        .route("/{canvas_id}", get(template::list_by_canvas))
        .route("/{canvas_id}/{template_key}", get(template::get_by_key))
}
