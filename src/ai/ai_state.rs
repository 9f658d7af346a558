//! Name generation state
//!
//! Tracks the single in-flight request, the parsed suggestions and any
//! user-facing error, plus the channel handles for the worker thread.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::suggestion::{NameSuggestion, parse_suggestions};

/// Request sent to the AI worker thread
#[derive(Debug)]
pub struct AiRequest {
    pub prompt: String,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
    /// Cancelled by the UI to abort the HTTP request
    pub cancel_token: CancellationToken,
}

/// Response messages received from the AI worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiResponse {
    /// Characters of model output received so far
    Progress { chars: usize, request_id: u64 },
    /// Full model output
    Complete { text: String, request_id: u64 },
    /// Request failed
    Error { message: String, request_id: u64 },
    /// Request was cancelled
    Cancelled { request_id: u64 },
}

impl AiResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            AiResponse::Progress { request_id, .. }
            | AiResponse::Complete { request_id, .. }
            | AiResponse::Error { request_id, .. }
            | AiResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Generation state
pub struct AiState {
    /// Whether an API key was available at startup
    pub configured: bool,
    pub provider_name: String,
    pub model_name: String,
    /// Whether a request is in flight
    pub loading: bool,
    /// User-facing error from the last request
    pub error: Option<String>,
    /// Suggestions from the last successful request
    pub suggestions: Vec<NameSuggestion>,
    /// Set after the first successful request, even if it returned no names
    pub has_result: bool,
    /// Characters of model output received for the in-flight request
    pub received_chars: usize,
    /// Current request ID, incremented for each new request
    pub request_id: u64,
    /// ID and cancellation token of the in-flight request
    in_flight: Option<(u64, CancellationToken)>,
    request_tx: Option<Sender<AiRequest>>,
    response_rx: Option<Receiver<AiResponse>>,
}

impl AiState {
    pub fn new(provider_name: &str, model_name: &str, configured: bool) -> Self {
        Self {
            configured,
            provider_name: provider_name.to_string(),
            model_name: model_name.to_string(),
            loading: false,
            error: None,
            suggestions: Vec::new(),
            has_result: false,
            received_chars: 0,
            request_id: 0,
            in_flight: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(&mut self, request_tx: Sender<AiRequest>, response_rx: Receiver<AiResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Send a generation request
    ///
    /// Only one request may be in flight; returns false if one already is or
    /// the worker is unavailable. Previous suggestions stay visible until the
    /// new result arrives.
    pub fn send_request(&mut self, prompt: String) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        let Some(tx) = self.request_tx.as_ref() else {
            return false;
        };

        let request_id = self.request_id.wrapping_add(1);
        let cancel_token = CancellationToken::new();
        let request = AiRequest {
            prompt,
            request_id,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(request).is_err() {
            self.set_error("AI worker is not running".to_string());
            return false;
        }

        self.request_id = request_id;
        self.in_flight = Some((request_id, cancel_token));
        self.loading = true;
        self.error = None;
        self.received_chars = 0;
        true
    }

    /// Drain pending responses from the worker
    ///
    /// Returns true if any response for the current request was applied.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;

        loop {
            let Some(rx) = self.response_rx.as_ref() else {
                return changed;
            };
            match rx.try_recv() {
                Ok(response) => changed |= self.handle_response(response),
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    if self.loading {
                        self.set_error("AI worker stopped unexpectedly".to_string());
                        changed = true;
                    }
                    return changed;
                }
            }
        }
    }

    /// Apply a single response; stale responses are ignored
    pub fn handle_response(&mut self, response: AiResponse) -> bool {
        if response.request_id() != self.request_id {
            log::debug!(
                "Ignoring stale response for request {} (current: {})",
                response.request_id(),
                self.request_id
            );
            return false;
        }

        // A cancelled request may still have output queued in the channel
        let in_flight = matches!(&self.in_flight, Some((id, _)) if *id == self.request_id);
        if !in_flight && !matches!(response, AiResponse::Cancelled { .. }) {
            log::debug!("Ignoring response for cancelled request {}", self.request_id);
            return false;
        }

        match response {
            AiResponse::Progress { chars, .. } => self.received_chars = chars,
            AiResponse::Complete { text, .. } => self.complete_request(&text),
            AiResponse::Error { message, .. } => self.set_error(message),
            AiResponse::Cancelled { .. } => {
                self.loading = false;
                self.in_flight = None;
            }
        }
        true
    }

    /// Parse the model output and store the suggestions or the parse error
    pub fn complete_request(&mut self, text: &str) {
        self.loading = false;
        self.in_flight = None;

        match parse_suggestions(text) {
            Ok(suggestions) => {
                log::debug!("Parsed {} suggestions", suggestions.len());
                self.suggestions = suggestions;
                self.has_result = true;
                self.error = None;
            }
            Err(e) => {
                log::debug!("Failed to parse response: {}", text);
                self.error = Some(format!("Failed to parse name suggestions: {}", e));
            }
        }
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
        self.in_flight = None;
    }

    /// Cancel the in-flight request, if any
    ///
    /// Returns true if a request was cancelled.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        let Some((request_id, token)) = self.in_flight.take() else {
            return false;
        };
        token.cancel();
        self.loading = false;
        log::debug!("Cancelled request {}", request_id);
        true
    }
}

#[cfg(test)]
#[path = "ai_state_tests.rs"]
mod ai_state_tests;
