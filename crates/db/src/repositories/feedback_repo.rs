//! Repository for the `feedback` table.

use sqlx::PgPool;
use startovate_core::types::DbId;

use crate::models::feedback::{CourseRatingSummary, Feedback, FeedbackWithContext};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, student_id, course_id, instructor_id, rating, comment, created_at, updated_at";

/// Provides CRUD operations for course feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a new feedback row. `instructor_id` is the value denormalized
    /// from the course by the caller at submission time.
    ///
    /// Callers must run the duplicate check
    /// ([`find_by_student_and_course`](Self::find_by_student_and_course))
    /// first; uniqueness of (student, course) is an application-layer
    /// invariant.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
        instructor_id: DbId,
        rating: i32,
        comment: &str,
    ) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (student_id, course_id, instructor_id, rating, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(student_id)
            .bind(course_id)
            .bind(instructor_id)
            .bind(rating)
            .bind(comment)
            .fetch_one(pool)
            .await
    }

    /// Find a feedback row by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the feedback a student left for a course, if any.
    pub async fn find_by_student_and_course(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM feedback WHERE student_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// List a student's own feedback, newest first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM feedback WHERE student_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List all feedback left on an instructor's courses, joined with
    /// student and course names, newest first.
    pub async fn list_by_instructor(
        pool: &PgPool,
        instructor_id: DbId,
    ) -> Result<Vec<FeedbackWithContext>, sqlx::Error> {
        sqlx::query_as::<_, FeedbackWithContext>(
            "SELECT f.id, f.student_id, u.name AS student_name,
                    f.course_id, c.title AS course_title,
                    f.rating, f.comment, f.created_at, f.updated_at
             FROM feedback f
             JOIN users u ON u.id = f.student_id
             JOIN courses c ON c.id = f.course_id
             WHERE f.instructor_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(instructor_id)
        .fetch_all(pool)
        .await
    }

    /// Per-course average rating and feedback count across an instructor's
    /// courses that have at least one feedback entry.
    pub async fn course_averages(
        pool: &PgPool,
        instructor_id: DbId,
    ) -> Result<Vec<CourseRatingSummary>, sqlx::Error> {
        sqlx::query_as::<_, CourseRatingSummary>(
            "SELECT f.course_id, c.title AS course_title,
                    AVG(f.rating)::DOUBLE PRECISION AS average_rating,
                    COUNT(*) AS feedback_count
             FROM feedback f
             JOIN courses c ON c.id = f.course_id
             WHERE f.instructor_id = $1
             GROUP BY f.course_id, c.title
             ORDER BY c.title",
        )
        .bind(instructor_id)
        .fetch_all(pool)
        .await
    }

    /// Update a feedback row's rating and/or comment, bumping `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        rating: Option<i32>,
        comment: Option<&str>,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback SET
                rating = COALESCE($2, rating),
                comment = COALESCE($3, comment),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(rating)
            .bind(comment)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feedback row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
