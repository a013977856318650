//! HTTP-level integration tests for signup, login, and the identity resolver.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get_auth, post_json, post_json_auth, TEST_PASSWORD};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

/// Signup returns 201 with the safe user representation, role `student`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_creates_student(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Amina",
        "email": "amina@test.com",
        "password": "a-long-password",
    });
    let response = post_json(app, "/api/users/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Amina");
    assert_eq!(json["email"], "amina@test.com");
    assert_eq!(json["role"], "student");
    assert!(
        json.get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

/// A second signup with the same email is rejected with 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_duplicate_email_conflicts(pool: PgPool) {
    let body = serde_json::json!({
        "name": "First",
        "email": "dup@test.com",
        "password": "a-long-password",
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/users/signup", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/users/signup", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "CONFLICT");
}

/// Malformed signup input is rejected before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/users/signup",
        serde_json::json!({"name": "X", "email": "not-an-email", "password": "a-long-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/users/signup",
        serde_json::json!({"name": "X", "email": "x@test.com", "password": "short"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login sets the `token` cookie and returns the user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_sets_cookie(pool: PgPool) {
    let user = create_user(&pool, "loginuser", "student").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({"email": user.email, "password": TEST_PASSWORD});
    let response = post_json(app, "/api/users/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("login must set a cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["role"], "student");
}

/// Wrong password returns 401 without revealing which part was wrong.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let user = create_user(&pool, "wrongpw", "student").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({"email": user.email, "password": "incorrect_password"});
    let response = post_json(app, "/api/users/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid email or password");
}

/// Unknown email returns the same 401 as a wrong password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({"email": "ghost@test.com", "password": "whatever"});
    let response = post_json(app, "/api/users/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Identity resolver
// ---------------------------------------------------------------------------

/// A valid cookie resolves to the full user record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_valid_cookie(pool: PgPool) {
    let user = create_user(&pool, "cookieuser", "teacher").await;
    let cookie = common::cookie_for(&user);
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/users/me", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["email"], user.email);
    assert_eq!(json["role"], "teacher");
}

/// A missing cookie fails the whole request with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_without_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/users/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage token fails with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_bad_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users/me", "token=not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Superadmin creation
// ---------------------------------------------------------------------------

/// Only a superadmin may create another superadmin.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_superadmin_creation_is_gated(pool: PgPool) {
    let student = create_user(&pool, "plainstudent", "student").await;
    let admin = create_user(&pool, "rootadmin", "superadmin").await;

    let body = serde_json::json!({
        "name": "Second Admin",
        "email": "admin2@test.com",
        "password": "a-long-password",
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/users/superadmin",
        body.clone(),
        &common::cookie_for(&student),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/users/superadmin", body, &common::cookie_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["role"], "superadmin");
}
