//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /signup       -> signup (public)
/// POST /login        -> login (public)
/// POST /logout       -> logout
/// GET  /me           -> me
/// POST /superadmin   -> create_superadmin (superadmin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(user::signup))
        .route("/login", post(user::login))
        .route("/logout", post(user::logout))
        .route("/me", get(user::me))
        .route("/superadmin", post(user::create_superadmin))
}
