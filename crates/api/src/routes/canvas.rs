//! Route definitions for the `/canvas` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::canvas;
use crate::state::AppState;

/// Routes mounted at `/canvas`.
///
/// ```text
/// POST /        -> create (one per user)
/// GET  /        -> mine
/// PUT  /{id}    -> update (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(canvas::mine).post(canvas::create))
        .route("/{id}", put(canvas::update))
}
