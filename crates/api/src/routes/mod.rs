//! Route definitions, one module per resource family.

pub mod canvas;
pub mod chatbot;
pub mod courses;
pub mod enroll;
pub mod feedback;
pub mod health;
pub mod templates;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users/signup                     signup (public)
/// /users/login                      login (public, sets `token` cookie)
/// /users/logout                     logout
/// /users/me                         current user
/// /users/superadmin                 create superadmin (superadmin only)
///
/// /courses                          create (teacher)
/// /courses/{id}                     get, update, delete
/// /courses/teacher/my-courses       owning-identity filter (teacher)
/// /courses/student/approved         approved catalog
/// /courses/approve/{id}             approval flip (superadmin)
/// /courses/progress                 progress ratchet (student)
///
/// /enroll                           enroll (student)
/// /enroll/my-courses                student's enrollments
///
/// /feedback                         submit (student, enrolled)
/// /feedback/{id}                    update, delete (student, owner)
/// /feedback/my                      student's own feedback
/// /feedback/teacher                 teacher view with averages
///
/// /canvas                           create, get mine
/// /canvas/{id}                      update (owner)
///
/// /templates/start                  lazy create
/// /templates/save                   shallow-merge save
/// /templates/{canvas_id}            list
/// /templates/{canvas_id}/{key}      get one
///
/// /chatbot/send-message             chat proxy
/// /chatbot/autofill                 autofill proxy
/// /chatbot/history                  list, clear
/// /chatbot/health                   upstream health probe
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/courses", courses::router())
        .nest("/enroll", enroll::router())
        .nest("/feedback", feedback::router())
        .nest("/canvas", canvas::router())
        .nest("/templates", templates::router())
        .nest("/chatbot", chatbot::router())
}
