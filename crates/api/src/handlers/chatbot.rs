//! Handlers for the `/chatbot` resource: the context-enrichment proxy.
//!
//! Before forwarding a chat query or an autofill request to the external
//! service, the handler enriches the payload with locally-available context
//! (step guidance text, the owner's canvas idea). After a successful
//! round-trip the exchange is appended to the user's chat history --
//! best-effort, because the user-visible value is the answer itself.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use startovate_core::stepkey::{parse_template_key, StepKey};
use startovate_core::types::DbId;
use startovate_db::models::chat_history::{ChatHistory, ChatMessage, MessageRole};
use startovate_db::models::template::TemplateContent;
use startovate_db::repositories::{CanvasRepo, ChatHistoryRepo, StepDescriptionRepo};
use validator::Validate;

use crate::chatbot::ChatbotClient;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /chatbot/send-message`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatMessageRequest {
    #[validate(length(min = 1, message = "query cannot be empty"))]
    pub query: String,
    pub top_k: Option<u32>,
    pub canvas_id: Option<DbId>,
    pub template_key: Option<String>,
}

/// Request body for `POST /chatbot/autofill`.
#[derive(Debug, Deserialize)]
pub struct AutofillRequest {
    pub template_key: String,
    pub canvas_id: Option<DbId>,
    /// Answers the user has already filled in, forwarded as context.
    #[serde(default)]
    pub current_answers: TemplateContent,
}

/// Query parameters for `DELETE /chatbot/history`.
#[derive(Debug, Deserialize)]
pub struct ClearHistoryParams {
    pub canvas_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/chatbot/send-message
pub async fn send_message(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ChatMessageRequest>,
) -> AppResult<Json<Value>> {
    input.validate()?;

    let query = input.query.trim().to_string();
    let mut payload = json!({
        "query": query,
        "top_k": input.top_k.unwrap_or(3),
    });

    // A malformed template key is rejected before any external call.
    let step = match &input.template_key {
        Some(key) => {
            let step = parse_template_key(key)?;
            payload["templateKey"] = json!(key);
            Some(step)
        }
        None => None,
    };

    enrich_payload(&state, &user, &mut payload, step.as_ref(), input.canvas_id).await?;

    let client = ChatbotClient::new(state.http.clone(), state.config.chatbot.clone());
    let answer = client.chat(&payload).await?;

    let answer_text = answer
        .get("response")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| answer.to_string());

    record_exchange(
        &state,
        user.user_id,
        input.canvas_id,
        input.template_key.as_deref(),
        query,
        answer_text,
    )
    .await;

    Ok(Json(json!({ "success": true, "data": answer })))
}

/// POST /api/chatbot/autofill
pub async fn autofill(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<AutofillRequest>,
) -> AppResult<Json<Value>> {
    // Fail fast on an unparsable key: no external call is made.
    let step = parse_template_key(&input.template_key)?;

    let mut payload = json!({
        "templateKey": input.template_key,
        "componentName": step.component_name,
        "stepNumber": step.step_number,
        "currentAnswers": input.current_answers,
    });

    enrich_payload(&state, &user, &mut payload, Some(&step), input.canvas_id).await?;

    let client = ChatbotClient::new(state.http.clone(), state.config.chatbot.clone());
    let answer = client.autofill(&payload).await?;

    record_exchange(
        &state,
        user.user_id,
        input.canvas_id,
        Some(&input.template_key),
        format!("Autofill requested for {}", input.template_key),
        answer.to_string(),
    )
    .await;

    Ok(Json(json!({ "success": true, "data": answer })))
}

/// GET /api/chatbot/history
pub async fn history(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ChatHistory>>> {
    let histories = ChatHistoryRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(histories))
}

/// DELETE /api/chatbot/history
pub async fn clear_history(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ClearHistoryParams>,
) -> AppResult<Json<MessageResponse>> {
    let removed =
        ChatHistoryRepo::delete_for_user(&state.pool, user.user_id, params.canvas_id).await?;
    Ok(Json(MessageResponse::ok(format!(
        "Deleted {removed} conversation(s)"
    ))))
}

/// GET /api/chatbot/health
///
/// Proxy the upstream health endpoint with a short timeout.
pub async fn upstream_health(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Value>> {
    let client = ChatbotClient::new(state.http.clone(), state.config.chatbot.clone());
    let health = client.health().await?;
    Ok(Json(json!({ "success": true, "data": health })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Attach locally-available context to the outbound payload.
///
/// Both lookups are non-fatal: a missing step description or a canvas that
/// does not belong to the actor (or has no idea text) simply leaves the
/// payload unenriched.
async fn enrich_payload(
    state: &AppState,
    user: &AuthUser,
    payload: &mut Value,
    step: Option<&StepKey>,
    canvas_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(step) = step {
        let description = StepDescriptionRepo::find_by_component_and_step(
            &state.pool,
            &step.component_name,
            step.step_number,
        )
        .await?;
        if let Some(description) = description {
            payload["stepDescription"] = json!(description.description);
        }
    }

    if let Some(canvas_id) = canvas_id {
        // Ownership-scoped lookup so context never leaks across users.
        let canvas =
            CanvasRepo::find_by_id_and_owner(&state.pool, canvas_id, user.user_id).await?;
        if let Some(idea) = canvas.and_then(|c| c.idea_description) {
            payload["ideaDescription"] = json!(idea);
        }
    }

    Ok(())
}

/// Append a (user, assistant) exchange to the chat history. Best-effort:
/// failures are logged and never fail the request.
async fn record_exchange(
    state: &AppState,
    user_id: DbId,
    canvas_id: Option<DbId>,
    template_key: Option<&str>,
    user_content: String,
    assistant_content: String,
) {
    let now = Utc::now();
    let exchange = [
        ChatMessage {
            role: MessageRole::User,
            content: user_content,
            timestamp: now,
        },
        ChatMessage {
            role: MessageRole::Assistant,
            content: assistant_content,
            timestamp: now,
        },
    ];

    if let Err(e) =
        ChatHistoryRepo::append_exchange(&state.pool, user_id, canvas_id, template_key, &exchange)
            .await
    {
        tracing::warn!(user_id, error = %e, "Failed to persist chat history");
    }
}
