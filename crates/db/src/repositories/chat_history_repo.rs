//! Repository for the `chat_histories` table.

use sqlx::types::Json;
use sqlx::PgPool;
use startovate_core::types::DbId;

use crate::models::chat_history::{ChatHistory, ChatMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, canvas_id, template_key, messages, last_message_at, created_at";

/// Provides operations for per-user chat histories.
pub struct ChatHistoryRepo;

impl ChatHistoryRepo {
    /// Find the history for a (user, canvas) pair. A `None` canvas matches
    /// the user's canvas-less conversation.
    pub async fn find_by_user_and_canvas(
        pool: &PgPool,
        user_id: DbId,
        canvas_id: Option<DbId>,
    ) -> Result<Option<ChatHistory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chat_histories
             WHERE user_id = $1 AND canvas_id IS NOT DISTINCT FROM $2"
        );
        sqlx::query_as::<_, ChatHistory>(&query)
            .bind(user_id)
            .bind(canvas_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's histories, most recently active first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<ChatHistory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chat_histories
             WHERE user_id = $1 ORDER BY last_message_at DESC"
        );
        sqlx::query_as::<_, ChatHistory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Append a conversation exchange to the (user, canvas) history,
    /// creating the document if it does not exist yet. Bumps
    /// `last_message_at` and remembers the most recent template key.
    pub async fn append_exchange(
        pool: &PgPool,
        user_id: DbId,
        canvas_id: Option<DbId>,
        template_key: Option<&str>,
        exchange: &[ChatMessage],
    ) -> Result<ChatHistory, sqlx::Error> {
        if let Some(existing) = Self::find_by_user_and_canvas(pool, user_id, canvas_id).await? {
            let query = format!(
                "UPDATE chat_histories SET
                    messages = messages || $2,
                    template_key = COALESCE($3, template_key),
                    last_message_at = NOW()
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, ChatHistory>(&query)
                .bind(existing.id)
                .bind(Json(exchange))
                .bind(template_key)
                .fetch_one(pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO chat_histories (user_id, canvas_id, template_key, messages)
                 VALUES ($1, $2, $3, $4)
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, ChatHistory>(&query)
                .bind(user_id)
                .bind(canvas_id)
                .bind(template_key)
                .bind(Json(exchange))
                .fetch_one(pool)
                .await
        }
    }

    /// Delete a user's histories, optionally scoped to one canvas.
    /// Returns the number of documents removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        user_id: DbId,
        canvas_id: Option<DbId>,
    ) -> Result<u64, sqlx::Error> {
        let result = match canvas_id {
            Some(canvas_id) => {
                sqlx::query("DELETE FROM chat_histories WHERE user_id = $1 AND canvas_id = $2")
                    .bind(user_id)
                    .bind(canvas_id)
                    .execute(pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM chat_histories WHERE user_id = $1")
                    .bind(user_id)
                    .execute(pool)
                    .await?
            }
        };
        Ok(result.rows_affected())
    }
}
