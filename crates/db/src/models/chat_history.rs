//! Chat history entity model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use startovate_core::types::{DbId, Timestamp};

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single conversation turn stored in the `messages` JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: Timestamp,
}

/// Full chat history row from the `chat_histories` table.
/// At most one per (user_id, canvas_id) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatHistory {
    pub id: DbId,
    pub user_id: DbId,
    pub canvas_id: Option<DbId>,
    pub template_key: Option<String>,
    pub messages: Json<Vec<ChatMessage>>,
    pub last_message_at: Timestamp,
    pub created_at: Timestamp,
}
