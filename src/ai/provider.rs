//! Chat-completion provider
//!
//! Defines the AiError type and the OpenAI-compatible client used for both
//! the DeepSeek and OpenAI presets.

use thiserror::Error;

mod chat;
mod sse;

pub use chat::ChatClient;
pub use sse::{OpenAiEventParser, SseEventParser, SseParser};

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key)
    #[error("[{provider}] AI not configured: {message}")]
    NotConfigured { provider: String, message: String },

    /// Network error during API request
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// API returned an error response
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse API response
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

/// Resolve the chat-completions endpoint from an optional base URL
///
/// `/chat/completions` is appended unless the URL already ends with it.
pub fn resolve_endpoint(base_url: Option<&str>, default_url: &str) -> String {
    let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) else {
        return default_url.to_string();
    };

    let base = base.trim_end_matches('/');
    if base.ends_with("/chat/completions") {
        base.to_string()
    } else {
        format!("{}/chat/completions", base)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
