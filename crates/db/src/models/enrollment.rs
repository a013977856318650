//! Enrollment (student-course) entity model.

use serde::Serialize;
use sqlx::FromRow;
use startovate_core::ownership::Owned;
use startovate_core::types::{DbId, Timestamp};

/// Full enrollment row from the `student_courses` table.
///
/// `completed` is derived: true iff `progress` has reached 100.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_at: Timestamp,
    /// Percentage in [0, 100], ratcheted upward only.
    pub progress: i32,
    pub completed: bool,
}

impl Owned for Enrollment {
    const ENTITY: &'static str = "Enrollment";

    fn owner_id(&self) -> DbId {
        self.student_id
    }
}

/// An enrollment joined with its course, for the student's "my courses" view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrolledCourse {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub progress: i32,
    pub completed: bool,
    pub enrolled_at: Timestamp,
}
