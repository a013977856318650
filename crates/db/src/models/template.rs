//! Canvas template entity model.
//!
//! A template is created lazily the first time a user starts a checklist
//! step, then mutated by repeated partial "save" calls: new answers
//! shallow-merge into the existing `content` map, never replacing it.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use startovate_core::types::DbId;

/// Field-name -> answer map stored in the `content` JSONB column.
pub type TemplateContent = serde_json::Map<String, serde_json::Value>;

/// Full template row from the `templates` table.
/// Unique per (canvas_id, template_key).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub canvas_id: DbId,
    /// Compound key of the form `<ComponentName>-Step<N>`.
    pub template_key: String,
    pub component_name: String,
    pub checklist_step: String,
    pub content: Json<TemplateContent>,
    pub completed: bool,
}

/// DTO for the lazy "start" creation of a template.
#[derive(Debug, Deserialize)]
pub struct StartTemplate {
    pub canvas_id: DbId,
    pub template_key: String,
    pub checklist_step: String,
}

/// DTO for a partial "save" call.
#[derive(Debug, Deserialize)]
pub struct SaveTemplate {
    pub canvas_id: DbId,
    pub template_key: String,
    /// Answers to shallow-merge into the stored content.
    #[serde(default)]
    pub content: TemplateContent,
    pub completed: Option<bool>,
}
