//! The identity resolver: a cookie-JWT authentication extractor.
//!
//! Resolution is token -> claims -> user row, and any failure along the way
//! (missing cookie, bad signature, expired token, user gone) rejects the
//! request with 401 before any handler logic runs. There are no retries;
//! verification failure is terminal for the request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use startovate_core::error::CoreError;
use startovate_core::types::DbId;
use startovate_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::auth::{cookie_value, AUTH_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `token` cookie.
///
/// Carries the full user record minus the password hash. Use this as an
/// extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    /// The user's role name (e.g. `"student"`, `"teacher"`, `"superadmin"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing cookie header".into()))
            })?;

        let token = cookie_value(cookie_header, AUTH_COOKIE).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Token not found in cookies".into()))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        // The token may outlive the account; re-resolve the user every request.
        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
            })?;

        Ok(AuthUser {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        })
    }
}
