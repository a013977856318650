//! Repository for the `step_descriptions` table.

use sqlx::PgPool;

use crate::models::step_description::StepDescription;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, component_name, step_number, description";

/// Read-side lookups for step guidance text. Rows are seeded operationally.
pub struct StepDescriptionRepo;

impl StepDescriptionRepo {
    /// Find the description for a (component, step) pair.
    pub async fn find_by_component_and_step(
        pool: &PgPool,
        component_name: &str,
        step_number: i32,
    ) -> Result<Option<StepDescription>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM step_descriptions
             WHERE component_name = $1 AND step_number = $2"
        );
        sqlx::query_as::<_, StepDescription>(&query)
            .bind(component_name)
            .bind(step_number)
            .fetch_optional(pool)
            .await
    }
}
