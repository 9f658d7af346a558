//! OpenAI-compatible chat-completion client
//!
//! Used for DeepSeek (the default preset) and OpenAI. Supports a single
//! JSON response or SSE streaming, with cancellation via CancellationToken.

use std::fmt;
use std::time::Duration;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use super::sse::{OpenAiEventParser, SseParser};
use super::{AiError, resolve_endpoint};
use crate::config::AiConfig;

/// Async chat-completion client
#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    provider: String,
    api_key: String,
    model: String,
    url: String,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("url", &self.url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    /// Create a client from the `[ai]` config section
    ///
    /// Returns an error if the API key is missing or blank.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let provider = config.provider.display_name().to_string();

        let api_key = config
            .api_key
            .as_ref()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AiError::NotConfigured {
                provider: provider.clone(),
                message: format!(
                    "Missing API key. Set api_key in [ai] config or {}",
                    config.provider.api_key_env()
                ),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::Network {
                provider: provider.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: config.model_name(),
            url: resolve_endpoint(config.base_url.as_deref(), config.provider.default_url()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            stream: config.stream,
            provider,
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the JSON request body
    pub fn build_request_body(&self, system: &str, prompt: &str) -> Result<String, AiError> {
        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": system
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "stream": self.stream
        });

        serde_json::to_string(&request_body).map_err(|e| self.parse_error(e.to_string()))
    }

    /// Send the prompt and return the full response text
    ///
    /// `on_progress` receives the number of characters received so far while
    /// a streamed response arrives. Returns `AiError::Cancelled` as soon as
    /// the token is cancelled.
    pub async fn complete_with_cancel<F>(
        &self,
        system: &str,
        prompt: &str,
        cancel_token: CancellationToken,
        mut on_progress: F,
    ) -> Result<String, AiError>
    where
        F: FnMut(usize),
    {
        if cancel_token.is_cancelled() {
            return Err(AiError::Cancelled);
        }

        let body = self.build_request_body(system, prompt)?;

        let request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .body(body)
            .send();

        let response = tokio::select! {
            biased;
            _ = cancel_token.cancelled() => return Err(AiError::Cancelled),
            result = request => result.map_err(|e| self.network_error(e))?,
        };

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::debug!("API error response ({}): {}", status, message);
            return Err(AiError::Api {
                provider: self.provider.clone(),
                code: status.as_u16(),
                message,
            });
        }

        if !self.stream {
            let text = tokio::select! {
                biased;
                _ = cancel_token.cancelled() => return Err(AiError::Cancelled),
                result = response.text() => result.map_err(|e| self.network_error(e))?,
            };
            let content = self.message_content(&text)?;
            on_progress(content.chars().count());
            return Ok(content);
        }

        let mut stream = response.bytes_stream();
        let mut sse_parser = SseParser::new(OpenAiEventParser);
        let mut content = String::new();
        let mut received = 0usize;

        loop {
            tokio::select! {
                biased;
                _ = cancel_token.cancelled() => return Err(AiError::Cancelled),
                chunk = stream.next() => match chunk {
                    Some(Ok(bytes)) => {
                        for text in sse_parser.parse_chunk(&bytes) {
                            received += text.chars().count();
                            content.push_str(&text);
                            on_progress(received);
                        }
                        if sse_parser.is_done() {
                            break;
                        }
                    }
                    Some(Err(e)) => return Err(self.network_error(e)),
                    None => break,
                },
            }
        }

        Ok(content)
    }

    /// Extract `choices[0].message.content` from a non-streamed response
    pub fn message_content(&self, body: &str) -> Result<String, AiError> {
        let json: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| self.parse_error(format!("Invalid API response: {}", e)))?;

        json.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .ok_or_else(|| {
                log::debug!("Invalid API response: {}", body);
                self.parse_error("Invalid API response format".to_string())
            })
    }

    fn network_error(&self, e: reqwest::Error) -> AiError {
        AiError::Network {
            provider: self.provider.clone(),
            message: e.to_string(),
        }
    }

    fn parse_error(&self, message: String) -> AiError {
        AiError::Parse {
            provider: self.provider.clone(),
            message,
        }
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod chat_tests;
