//! Repository for the `canvases` table.

use sqlx::PgPool;
use startovate_core::types::DbId;

use crate::models::canvas::{Canvas, CreateCanvas, UpdateCanvas};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, research_title, author_name, idea_description, created_at";

/// Provides CRUD operations for canvases.
pub struct CanvasRepo;

impl CanvasRepo {
    /// Insert a new canvas for the given owner.
    ///
    /// Callers must run the one-canvas-per-user check
    /// ([`find_by_owner`](Self::find_by_owner)) first.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateCanvas,
    ) -> Result<Canvas, sqlx::Error> {
        let query = format!(
            "INSERT INTO canvases (owner_id, research_title, author_name, idea_description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Canvas>(&query)
            .bind(owner_id)
            .bind(&input.research_title)
            .bind(&input.author_name)
            .bind(&input.idea_description)
            .fetch_one(pool)
            .await
    }

    /// Find a canvas by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Canvas>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM canvases WHERE id = $1");
        sqlx::query_as::<_, Canvas>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the canvas owned by a user, if any.
    pub async fn find_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Option<Canvas>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM canvases WHERE owner_id = $1");
        sqlx::query_as::<_, Canvas>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Ownership-scoped lookup: the canvas with this id, but only if it
    /// belongs to `owner_id`. Used by the chat proxy so context never leaks
    /// across users.
    pub async fn find_by_id_and_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Canvas>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM canvases WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Canvas>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a canvas. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCanvas,
    ) -> Result<Option<Canvas>, sqlx::Error> {
        let query = format!(
            "UPDATE canvases SET
                research_title = COALESCE($2, research_title),
                author_name = COALESCE($3, author_name),
                idea_description = COALESCE($4, idea_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Canvas>(&query)
            .bind(id)
            .bind(&input.research_title)
            .bind(&input.author_name)
            .bind(&input.idea_description)
            .fetch_optional(pool)
            .await
    }
}
