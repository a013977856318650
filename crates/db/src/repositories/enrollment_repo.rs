//! Repository for the `student_courses` table.

use sqlx::PgPool;
use startovate_core::types::DbId;

use crate::models::enrollment::{EnrolledCourse, Enrollment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, course_id, enrolled_at, progress, completed";

/// Provides enrollment operations, including the progress ratchet.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment with zero progress.
    ///
    /// Callers must run the duplicate check
    /// ([`find_by_student_and_course`](Self::find_by_student_and_course))
    /// first; uniqueness of (student, course) is an application-layer
    /// invariant.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_courses (student_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Find the enrollment for a (student, course) pair.
    pub async fn find_by_student_and_course(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM student_courses WHERE student_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// List a student's enrollments joined with course details, most recent
    /// enrollment first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<EnrolledCourse>, sqlx::Error> {
        sqlx::query_as::<_, EnrolledCourse>(
            "SELECT sc.id, sc.course_id, c.title, c.category, c.price,
                    sc.progress, sc.completed, sc.enrolled_at
             FROM student_courses sc
             JOIN courses c ON c.id = sc.course_id
             WHERE sc.student_id = $1
             ORDER BY sc.enrolled_at DESC",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }

    /// Ratchet the stored progress for a (student, course) enrollment.
    ///
    /// A single atomic statement sets progress to the maximum of the stored
    /// and observed values and derives `completed` from the post-update
    /// progress, so concurrent reports cannot lose an update. Non-improving
    /// reports leave the row unchanged.
    ///
    /// Returns `None` if no enrollment exists for the pair.
    pub async fn apply_progress(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
        observed: i32,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE student_courses
             SET progress = GREATEST(progress, $3),
                 completed = GREATEST(progress, $3) >= 100
             WHERE student_id = $1 AND course_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .bind(observed)
            .fetch_optional(pool)
            .await
    }
}
