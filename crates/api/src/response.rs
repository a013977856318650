//! Shared response envelope types for API handlers.
//!
//! Mutations that return a confirmation rather than a resource use
//! [`MessageResponse`] so every such reply carries the same
//! `{ "success": true, "message": ... }` shape.

use serde::Serialize;

/// Standard confirmation envelope for mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// A successful confirmation with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        MessageResponse {
            success: true,
            message: message.into(),
        }
    }
}
