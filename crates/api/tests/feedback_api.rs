//! HTTP-level integration tests for the feedback lifecycle, including the
//! end-to-end enroll -> feedback -> teacher-view scenario.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, cookie_for, create_user, delete_auth, get_auth, post_json_auth, put_json_auth,
};
use sqlx::PgPool;
use startovate_db::models::user::User;
use startovate_db::repositories::FeedbackRepo;

/// Seed a teacher with one course, returning (teacher, course_id).
async fn seed_teacher_course(pool: &PgPool, name: &str) -> (User, i64) {
    let teacher = create_user(pool, name, "teacher").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/courses",
        serde_json::json!({"title": "Good Course", "price": 20.0}),
        &cookie_for(&teacher),
    )
    .await;
    let course_id = body_json(response).await["id"].as_i64().unwrap();
    (teacher, course_id)
}

/// Enroll `cookie`'s student into `course_id`.
async fn enroll(pool: &PgPool, cookie: &str, course_id: i64) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/enroll",
        serde_json::json!({"course_id": course_id}),
        cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// End-to-end scenario: enroll -> feedback -> duplicate -> teacher view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_feedback_end_to_end(pool: PgPool) {
    let (teacher, course_id) = seed_teacher_course(&pool, "fteach1").await;
    let student = create_user(&pool, "fstud1", "student").await;
    let cookie = cookie_for(&student);

    enroll(&pool, &cookie, course_id).await;

    // Submit feedback.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/feedback",
        serde_json::json!({"course_id": course_id, "rating": 4, "comment": "Good course"}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["rating"], 4);
    // The instructor is denormalized from the course at submission time.
    assert_eq!(json["instructor_id"], teacher.id);

    // A second submission for the same (student, course) is rejected.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/feedback",
        serde_json::json!({"course_id": course_id, "rating": 5, "comment": "Again"}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Teacher view: exactly one entry, average 4.0.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/feedback/teacher", &cookie_for(&teacher)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json["feedback"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["comment"], "Good course");
    assert_eq!(entries[0]["course_title"], "Good Course");
    let courses = json["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["average_rating"], 4.0);
    assert_eq!(courses[0]["feedback_count"], 1);
}

// ---------------------------------------------------------------------------
// Gates
// ---------------------------------------------------------------------------

/// Feedback without an enrollment is Forbidden.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_feedback_requires_enrollment(pool: PgPool) {
    let (_teacher, course_id) = seed_teacher_course(&pool, "fteach2").await;
    let student = create_user(&pool, "fstud2", "student").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/feedback",
        serde_json::json!({"course_id": course_id, "rating": 3, "comment": "Hi"}),
        &cookie_for(&student),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// An out-of-range rating is rejected before any I/O: no row is stored.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_rating_range_is_a_hard_precondition(pool: PgPool) {
    let (_teacher, course_id) = seed_teacher_course(&pool, "fteach3").await;
    let student = create_user(&pool, "fstud3", "student").await;
    let cookie = cookie_for(&student);
    enroll(&pool, &cookie, course_id).await;

    for rating in [0, 6] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/feedback",
            serde_json::json!({"course_id": course_id, "rating": rating, "comment": "X"}),
            &cookie,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let stored = FeedbackRepo::find_by_student_and_course(&pool, student.id, course_id)
        .await
        .unwrap();
    assert!(stored.is_none(), "no feedback may reach the store");
}

/// Update and delete are ownership-gated; a non-owner leaves the store
/// unchanged.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_feedback_ownership_gates(pool: PgPool) {
    let (_teacher, course_id) = seed_teacher_course(&pool, "fteach4").await;
    let owner = create_user(&pool, "fowner", "student").await;
    let rival = create_user(&pool, "frival", "student").await;
    let owner_cookie = cookie_for(&owner);

    enroll(&pool, &owner_cookie, course_id).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/feedback",
        serde_json::json!({"course_id": course_id, "rating": 2, "comment": "Meh"}),
        &owner_cookie,
    )
    .await;
    let feedback_id = body_json(response).await["id"].as_i64().unwrap();

    // Non-owner update: Forbidden, store unchanged.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/feedback/{feedback_id}"),
        serde_json::json!({"rating": 5}),
        &cookie_for(&rival),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let stored = FeedbackRepo::find_by_id(&pool, feedback_id).await.unwrap().unwrap();
    assert_eq!(stored.rating, 2);

    // Owner update applies.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/feedback/{feedback_id}"),
        serde_json::json!({"rating": 4, "comment": "Better on rewatch"}),
        &owner_cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["rating"], 4);

    // Non-owner delete: Forbidden. Owner delete: removes the row.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/feedback/{feedback_id}"),
        &cookie_for(&rival),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/feedback/{feedback_id}"), &owner_cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = FeedbackRepo::find_by_id(&pool, feedback_id).await.unwrap();
    assert!(stored.is_none());
}

/// The student's own list shows their entries.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_my_feedback(pool: PgPool) {
    let (_teacher, course_id) = seed_teacher_course(&pool, "fteach5").await;
    let student = create_user(&pool, "fstud5", "student").await;
    let cookie = cookie_for(&student);
    enroll(&pool, &cookie, course_id).await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/feedback",
        serde_json::json!({"course_id": course_id, "rating": 5, "comment": "Loved it"}),
        &cookie,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/feedback/my", &cookie).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["comment"], "Loved it");
}
