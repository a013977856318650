//! HTTP-level integration tests for lazy template creation and
//! shallow-merge saves.

mod common;

use axum::http::StatusCode;
use common::{body_json, cookie_for, create_user, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;
use startovate_db::models::user::User;

/// Create a user with a canvas, returning (user, canvas_id).
async fn seed_canvas(pool: &PgPool, name: &str) -> (User, i64) {
    let user = create_user(pool, name, "student").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/canvas",
        serde_json::json!({"research_title": "Canvas", "author_name": name}),
        &cookie_for(&user),
    )
    .await;
    let canvas_id = body_json(response).await["id"].as_i64().unwrap();
    (user, canvas_id)
}

/// Start is a lazy get-or-create keyed on (canvas, template_key).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_start_is_lazy_create(pool: PgPool) {
    let (user, canvas_id) = seed_canvas(&pool, "tuser1").await;
    let cookie = cookie_for(&user);

    let body = serde_json::json!({
        "canvas_id": canvas_id,
        "template_key": "Funding-Step1",
        "checklist_step": "Identify funding sources",
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/templates/start", body.clone(), &cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    // The component name is derived from the key.
    assert_eq!(created["component_name"], "Funding");
    assert_eq!(created["completed"], false);
    let first_id = created["id"].as_i64().unwrap();

    // Starting again returns the existing template unchanged.
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/templates/start", body, &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], first_id);
}

/// A malformed template key fails before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_start_rejects_bad_key(pool: PgPool) {
    let (user, canvas_id) = seed_canvas(&pool, "tuser2").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/templates/start",
        serde_json::json!({
            "canvas_id": canvas_id,
            "template_key": "FundingStep1",
            "checklist_step": "x",
        }),
        &cookie_for(&user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Saves shallow-merge into the stored content: new keys are added,
/// existing keys overwritten, untouched keys kept.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_shallow_merges(pool: PgPool) {
    let (user, canvas_id) = seed_canvas(&pool, "tuser3").await;
    let cookie = cookie_for(&user);

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/templates/start",
        serde_json::json!({
            "canvas_id": canvas_id,
            "template_key": "Funding-Step2",
            "checklist_step": "Estimate costs",
        }),
        &cookie,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/templates/save",
        serde_json::json!({
            "canvas_id": canvas_id,
            "template_key": "Funding-Step2",
            "content": {"budget": "10k", "source": "grant"},
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/templates/save",
        serde_json::json!({
            "canvas_id": canvas_id,
            "template_key": "Funding-Step2",
            "content": {"budget": "15k", "timeline": "6 months"},
            "completed": true,
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["content"]["budget"], "15k", "existing key overwritten");
    assert_eq!(json["content"]["source"], "grant", "untouched key kept");
    assert_eq!(json["content"]["timeline"], "6 months", "new key added");
    assert_eq!(json["completed"], true);
}

/// Saving a template that was never started is an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_requires_start(pool: PgPool) {
    let (user, canvas_id) = seed_canvas(&pool, "tuser4").await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/templates/save",
        serde_json::json!({
            "canvas_id": canvas_id,
            "template_key": "Relations-Step1",
            "content": {"a": 1},
        }),
        &cookie_for(&user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Template access goes through canvas ownership.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_templates_are_canvas_owner_gated(pool: PgPool) {
    let (owner, canvas_id) = seed_canvas(&pool, "towner").await;
    let rival = create_user(&pool, "trival", "student").await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/templates/start",
        serde_json::json!({
            "canvas_id": canvas_id,
            "template_key": "Funding-Step1",
            "checklist_step": "x",
        }),
        &cookie_for(&owner),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/templates/{canvas_id}"),
        &cookie_for(&rival),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/templates/{canvas_id}/Funding-Step1"),
        &cookie_for(&owner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["template_key"], "Funding-Step1");
}
