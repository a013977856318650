//! Step description entity model.

use serde::Serialize;
use sqlx::FromRow;
use startovate_core::types::DbId;

/// Guidance text for one checklist step of a canvas component, looked up by
/// (component_name, step_number) to enrich chat and autofill requests.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StepDescription {
    pub id: DbId,
    pub component_name: String,
    pub step_number: i32,
    pub description: String,
}
