//! Handlers for the `/users` resource (signup, login, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::AppendHeaders;
use axum::Json;
use serde::Deserialize;
use startovate_core::error::CoreError;
use startovate_core::roles::{ROLE_STUDENT, ROLE_SUPERADMIN};
use startovate_db::models::user::{CreateUser, UserResponse};
use startovate_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::{clear_session_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSuperadmin;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/signup` and `POST /users/superadmin`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/users/signup
///
/// Public registration. The role is always `student`; teacher accounts are
/// provisioned out of band and superadmins via the privileged endpoint.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let user = create_account(&state, input, ROLE_STUDENT).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/users/superadmin
///
/// Privileged creation of a superadmin account.
pub async fn create_superadmin(
    State(state): State<AppState>,
    RequireSuperadmin(_admin): RequireSuperadmin,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let user = create_account(&state, input, ROLE_SUPERADMIN).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/users/login
///
/// Verify credentials and set the signed `token` cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(AppendHeaders<[(axum::http::HeaderName, String); 1]>, Json<UserResponse>)> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let cookie = session_cookie(&token, state.config.jwt.token_expiry_secs());

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(UserResponse::from(user)),
    ))
}

/// POST /api/users/logout
///
/// Clear the session cookie.
pub async fn logout(
    _user: AuthUser,
) -> (AppendHeaders<[(axum::http::HeaderName, String); 1]>, Json<MessageResponse>) {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(MessageResponse::ok("Logged out successfully")),
    )
}

/// GET /api/users/me
///
/// The authenticated user's safe representation.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
        })?;
    Ok(Json(UserResponse::from(record)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Uniqueness-gated account creation shared by signup and superadmin flows.
async fn create_account(
    state: &AppState,
    input: SignupRequest,
    role: &str,
) -> AppResult<UserResponse> {
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "An account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
            role: role.to_string(),
        },
    )
    .await?;

    Ok(UserResponse::from(user))
}
