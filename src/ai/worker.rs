//! AI Worker Thread
//!
//! Runs chat-completion requests on a background thread so the UI never
//! blocks. The thread owns a current-thread tokio runtime and the client;
//! requests arrive over a channel and results are sent back the same way.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use tokio::runtime::Runtime;

use super::ai_state::{AiRequest, AiResponse};
use super::prompt::system_prompt;
use super::provider::{AiError, ChatClient};
use crate::config::AiConfig;

/// Spawn the AI worker thread
///
/// The client is built up front; if that fails (e.g. no API key) the worker
/// still runs and answers every request with the configuration error.
pub fn spawn_worker(
    config: &AiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) -> JoinHandle<()> {
    let client_result = ChatClient::from_config(config);

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx);
    })
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client_result: Result<ChatClient, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let client = match client_result {
        Ok(c) => Ok(c),
        Err(e) => {
            // Reported when the first request arrives
            log::debug!("AI client not configured: {}", e);
            Err(e.to_string())
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {}", e));

    while let Ok(request) = request_rx.recv() {
        handle_request(&client, &runtime, request, &response_tx);
    }

    log::debug!("AI worker thread shutting down");
}

fn handle_request(
    client: &Result<ChatClient, String>,
    runtime: &Result<Runtime, String>,
    request: AiRequest,
    response_tx: &Sender<AiResponse>,
) {
    let AiRequest {
        prompt,
        request_id,
        cancel_token,
    } = request;

    let (client, runtime) = match (client, runtime) {
        (Ok(client), Ok(runtime)) => (client, runtime),
        (Err(message), _) | (_, Err(message)) => {
            let _ = response_tx.send(AiResponse::Error {
                message: message.clone(),
                request_id,
            });
            return;
        }
    };

    log::debug!(
        "Sending request {} to {} ({})",
        request_id,
        client.provider_name(),
        client.model()
    );

    let result = runtime.block_on(client.complete_with_cancel(
        system_prompt(),
        &prompt,
        cancel_token,
        |chars| {
            let _ = response_tx.send(AiResponse::Progress { chars, request_id });
        },
    ));

    let response = match result {
        Ok(text) => AiResponse::Complete { text, request_id },
        Err(AiError::Cancelled) => {
            log::debug!("Cancelled request {}", request_id);
            AiResponse::Cancelled { request_id }
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request_id, e);
            AiResponse::Error {
                message: e.to_string(),
                request_id,
            }
        }
    };

    // Main thread may have exited already
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
