//! Repository for the `templates` table.

use sqlx::types::Json;
use sqlx::PgPool;
use startovate_core::types::DbId;

use crate::models::template::{Template, TemplateContent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, canvas_id, template_key, component_name, checklist_step, content, completed";

/// Provides operations for canvas templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template with empty content.
    ///
    /// Callers must run the per-(canvas, key) duplicate check
    /// ([`find_by_canvas_and_key`](Self::find_by_canvas_and_key)) first.
    pub async fn create(
        pool: &PgPool,
        canvas_id: DbId,
        template_key: &str,
        component_name: &str,
        checklist_step: &str,
    ) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates (canvas_id, template_key, component_name, checklist_step)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(canvas_id)
            .bind(template_key)
            .bind(component_name)
            .bind(checklist_step)
            .fetch_one(pool)
            .await
    }

    /// Find the template for a (canvas, key) pair.
    pub async fn find_by_canvas_and_key(
        pool: &PgPool,
        canvas_id: DbId,
        template_key: &str,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM templates WHERE canvas_id = $1 AND template_key = $2");
        sqlx::query_as::<_, Template>(&query)
            .bind(canvas_id)
            .bind(template_key)
            .fetch_optional(pool)
            .await
    }

    /// List all templates belonging to a canvas.
    pub async fn list_by_canvas(
        pool: &PgPool,
        canvas_id: DbId,
    ) -> Result<Vec<Template>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM templates WHERE canvas_id = $1 ORDER BY template_key");
        sqlx::query_as::<_, Template>(&query)
            .bind(canvas_id)
            .fetch_all(pool)
            .await
    }

    /// Shallow-merge `answers` into the stored content map and optionally
    /// set the completed flag.
    ///
    /// The JSONB `||` operator gives exactly the required semantics: new
    /// keys are added, existing keys overwritten, everything else kept.
    pub async fn merge_content(
        pool: &PgPool,
        id: DbId,
        answers: &TemplateContent,
        completed: Option<bool>,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "UPDATE templates SET
                content = content || $2,
                completed = COALESCE($3, completed)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(Json(answers))
            .bind(completed)
            .fetch_optional(pool)
            .await
    }
}
