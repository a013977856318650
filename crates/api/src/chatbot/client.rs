//! HTTP client for the external chatbot service.
//!
//! One attempt per request, bounded timeouts per operation. Error mapping:
//! connection failures and timeouts become 503 ("service unavailable"), a
//! non-2xx upstream reply is passed through with its status and message,
//! anything else is an internal error.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;

use crate::config::ChatbotConfig;
use crate::error::{AppError, AppResult};
use startovate_core::error::CoreError;

/// Thin wrapper over a shared [`reqwest::Client`] targeting one chatbot
/// deployment.
#[derive(Clone)]
pub struct ChatbotClient {
    http: reqwest::Client,
    config: ChatbotConfig,
}

impl ChatbotClient {
    pub fn new(http: reqwest::Client, config: ChatbotConfig) -> Self {
        Self { http, config }
    }

    /// Forward an enriched chat payload to `POST /chat`.
    pub async fn chat(&self, payload: &Value) -> AppResult<Value> {
        self.post("/chat", payload, self.config.chat_timeout_secs)
            .await
    }

    /// Forward an enriched autofill payload to `POST /autofill`.
    pub async fn autofill(&self, payload: &Value) -> AppResult<Value> {
        self.post("/autofill", payload, self.config.autofill_timeout_secs)
            .await
    }

    /// Probe the upstream health endpoint.
    pub async fn health(&self) -> AppResult<Value> {
        let url = format!("{}/health", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(self.config.health_timeout_secs))
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::read_response(response).await
    }

    async fn post(&self, path: &str, payload: &Value, timeout_secs: u64) -> AppResult<Value> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(payload)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::read_response(response).await
    }

    /// Turn an upstream reply into a JSON value or a pass-through error.
    async fn read_response(response: reqwest::Response) -> AppResult<Value> {
        let status = response.status();
        if status.is_success() {
            return response.json::<Value>().await.map_err(|e| {
                AppError::InternalError(format!("Invalid response from chatbot service: {e}"))
            });
        }

        // FastAPI-style services put the human-readable message in `detail`.
        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(Value::as_str)
                .unwrap_or("Chatbot service error")
                .to_string(),
            Err(_) => "Chatbot service error".to_string(),
        };

        Err(AppError::Upstream {
            status: StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message,
        })
    }
}

/// Map a reqwest transport error to the application taxonomy.
fn map_transport_error(err: reqwest::Error) -> AppError {
    if err.is_connect() || err.is_timeout() {
        AppError::Core(CoreError::Unavailable(
            "Chatbot service is unavailable. Please try again later.".into(),
        ))
    } else {
        AppError::InternalError(format!("Chatbot request failed: {err}"))
    }
}
