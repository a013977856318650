//! Course entity model and DTOs.
//!
//! A course's video curriculum is stored as a JSONB document: an ordered
//! sequence of chapters, each holding an ordered sequence of lessons.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use startovate_core::ownership::Owned;
use startovate_core::types::{DbId, Timestamp};

/// Where a lesson's video is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonSource {
    Youtube,
    Drive,
}

/// A single video lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    #[serde(rename = "type")]
    pub source: LessonSource,
    pub url: String,
}

/// An ordered group of lessons within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub lessons: Vec<Lesson>,
}

/// Full course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub instructor_id: DbId,
    pub price: f64,
    pub category: String,
    pub videos: Json<Vec<Chapter>>,
    pub is_approved: bool,
    pub created_at: Timestamp,
}

impl Owned for Course {
    const ENTITY: &'static str = "Course";

    fn owner_id(&self) -> DbId {
        self.instructor_id
    }
}

/// DTO for creating a course. The instructor comes from the authenticated
/// identity, never from the body.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub videos: Vec<Chapter>,
}

/// DTO for updating a course. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub videos: Option<Vec<Chapter>>,
}
