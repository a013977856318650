//! Course progress aggregation.
//!
//! Clients fold per-lesson watch fractions into an overall course percentage
//! ([`overall_progress`]) and report it; the server only ratchets the stored
//! value upward ([`ratchet`]). Stale or out-of-order reports therefore can
//! never regress a student's progress.

/// A lesson counts as complete once at least this fraction has been watched.
pub const LESSON_COMPLETION_THRESHOLD: f64 = 0.90;

/// Progress value at which an enrollment is considered completed.
pub const COMPLETED_PROGRESS: i32 = 100;

/// Fold per-lesson watched fractions into an overall percentage.
///
/// A lesson is counted once its watched fraction reaches
/// [`LESSON_COMPLETION_THRESHOLD`]; the result is
/// `round(100 * completed / total)`. An empty lesson list yields 0.
pub fn overall_progress(watched_fractions: &[f64]) -> i32 {
    if watched_fractions.is_empty() {
        return 0;
    }
    let completed = watched_fractions
        .iter()
        .filter(|&&f| f >= LESSON_COMPLETION_THRESHOLD)
        .count();
    ((100.0 * completed as f64) / watched_fractions.len() as f64).round() as i32
}

/// The ratchet law: the value to store given the current and observed
/// progress, or `None` when the report does not improve on what is stored.
pub fn ratchet(stored: i32, observed: i32) -> Option<i32> {
    (observed > stored).then_some(observed)
}

/// Whether a progress value marks the enrollment as completed.
pub fn is_complete(progress: i32) -> bool {
    progress >= COMPLETED_PROGRESS
}
