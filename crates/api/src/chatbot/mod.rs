//! Outbound integration with the external chat/autofill service.

pub mod client;

pub use client::ChatbotClient;
