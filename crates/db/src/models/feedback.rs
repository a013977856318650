//! Feedback entity model and teacher-view projections.

use serde::Serialize;
use sqlx::FromRow;
use startovate_core::ownership::Owned;
use startovate_core::types::{DbId, Timestamp};

/// Full feedback row from the `feedback` table.
///
/// `instructor_id` is copied from the course at submission time and is not
/// kept in sync afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub instructor_id: DbId,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Feedback {
    const ENTITY: &'static str = "Feedback";

    fn owner_id(&self) -> DbId {
        self.student_id
    }
}

/// Feedback joined with student and course names, for the teacher view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackWithContext {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub course_id: DbId,
    pub course_title: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Per-course rating aggregate for an instructor's courses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseRatingSummary {
    pub course_id: DbId,
    pub course_title: String,
    pub average_rating: f64,
    pub feedback_count: i64,
}
