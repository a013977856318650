//! Route definitions for the `/chatbot` proxy.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chatbot;
use crate::state::AppState;

/// Routes mounted at `/chatbot`. All require authentication.
///
/// ```text
/// POST   /send-message    -> send_message
/// POST   /autofill        -> autofill
/// GET    /history         -> history
/// DELETE /history         -> clear_history
/// GET    /health          -> upstream_health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send-message", post(chatbot::send_message))
        .route("/autofill", post(chatbot::autofill))
        .route(
            "/history",
            get(chatbot::history).delete(chatbot::clear_history),
        )
        .route("/health", get(chatbot::upstream_health))
}
