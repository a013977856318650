//! Lean Canvas entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use startovate_core::ownership::Owned;
use startovate_core::types::{DbId, Timestamp};

/// Full canvas row from the `canvases` table. At most one per owning user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Canvas {
    pub id: DbId,
    pub owner_id: DbId,
    pub research_title: String,
    pub author_name: String,
    /// Free-text idea summary; attached as chat/autofill context when set.
    pub idea_description: Option<String>,
    pub created_at: Timestamp,
}

impl Owned for Canvas {
    const ENTITY: &'static str = "Canvas";

    fn owner_id(&self) -> DbId {
        self.owner_id
    }
}

/// DTO for creating a canvas. The owner comes from the authenticated identity.
#[derive(Debug, Deserialize)]
pub struct CreateCanvas {
    pub research_title: String,
    pub author_name: String,
    pub idea_description: Option<String>,
}

/// DTO for updating a canvas. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateCanvas {
    pub research_title: Option<String>,
    pub author_name: Option<String>,
    pub idea_description: Option<String>,
}
