//! Tests for generation state

use super::*;
use std::sync::mpsc;

const ONE_SUGGESTION: &str = r#"{"suggestions": [{"chineseName": "艾琳", "pinyin": "Ài Lín",
  "explanation": {"individual": ["艾 - graceful", "琳 - jade"], "overall": "o",
  "cultural": "c", "personality": "p"}}]}"#;

fn connected_state() -> (AiState, mpsc::Receiver<AiRequest>, mpsc::Sender<AiResponse>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut state = AiState::new("DeepSeek", "deepseek-chat", true);
    state.set_channels(request_tx, response_rx);
    (state, request_rx, response_tx)
}

#[test]
fn test_new_state() {
    let state = AiState::new("DeepSeek", "deepseek-chat", false);
    assert!(!state.configured);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.suggestions.is_empty());
    assert!(!state.has_result);
    assert!(!state.has_in_flight_request());
}

#[test]
fn test_send_request_without_channel() {
    let mut state = AiState::new("DeepSeek", "deepseek-chat", true);
    assert!(!state.send_request("prompt".to_string()));
    assert!(!state.loading);
}

#[test]
fn test_send_request_sets_loading_and_id() {
    let (mut state, request_rx, _response_tx) = connected_state();

    assert!(state.send_request("prompt".to_string()));
    assert!(state.loading);
    assert_eq!(state.request_id, 1);
    assert!(state.has_in_flight_request());

    let request = request_rx.recv().unwrap();
    assert_eq!(request.prompt, "prompt");
    assert_eq!(request.request_id, 1);
    assert!(!request.cancel_token.is_cancelled());
}

#[test]
fn test_only_one_request_in_flight() {
    let (mut state, request_rx, _response_tx) = connected_state();

    assert!(state.send_request("first".to_string()));
    assert!(!state.send_request("second".to_string()));
    assert_eq!(state.request_id, 1);

    let _ = request_rx.recv().unwrap();
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_send_request_fails_when_worker_gone() {
    let (mut state, request_rx, _response_tx) = connected_state();
    drop(request_rx);

    assert!(!state.send_request("prompt".to_string()));
    assert!(!state.loading);
    assert!(state.error.is_some());
}

#[test]
fn test_complete_response_parses_suggestions() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("prompt".to_string());

    response_tx
        .send(AiResponse::Complete {
            text: ONE_SUGGESTION.to_string(),
            request_id: 1,
        })
        .unwrap();

    assert!(state.poll_responses());
    assert!(!state.loading);
    assert!(state.has_result);
    assert_eq!(state.suggestions.len(), 1);
    assert_eq!(state.suggestions[0].chinese_name, "艾琳");
    assert!(!state.has_in_flight_request());
}

#[test]
fn test_unparseable_response_sets_error_and_keeps_old_suggestions() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.complete_request(ONE_SUGGESTION);
    state.send_request("prompt".to_string());

    response_tx
        .send(AiResponse::Complete {
            text: "I'm sorry, I can't do that.".to_string(),
            request_id: 1,
        })
        .unwrap();
    state.poll_responses();

    let error = state.error.as_deref().unwrap();
    assert!(error.starts_with("Failed to parse name suggestions"));
    assert_eq!(state.suggestions.len(), 1);
    assert!(!state.loading);
}

#[test]
fn test_error_response() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("prompt".to_string());

    response_tx
        .send(AiResponse::Error {
            message: "[DeepSeek] API error (401): bad key".to_string(),
            request_id: 1,
        })
        .unwrap();
    state.poll_responses();

    assert_eq!(
        state.error.as_deref(),
        Some("[DeepSeek] API error (401): bad key")
    );
    assert!(!state.loading);
}

#[test]
fn test_progress_updates_received_chars() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("prompt".to_string());

    response_tx
        .send(AiResponse::Progress {
            chars: 10,
            request_id: 1,
        })
        .unwrap();
    response_tx
        .send(AiResponse::Progress {
            chars: 42,
            request_id: 1,
        })
        .unwrap();
    state.poll_responses();

    assert_eq!(state.received_chars, 42);
    assert!(state.loading);
}

#[test]
fn test_stale_responses_are_ignored() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("first".to_string());
    state.cancel_in_flight_request();
    state.send_request("second".to_string());
    assert_eq!(state.request_id, 2);

    response_tx
        .send(AiResponse::Complete {
            text: ONE_SUGGESTION.to_string(),
            request_id: 1,
        })
        .unwrap();

    assert!(!state.poll_responses());
    assert!(state.loading);
    assert!(state.suggestions.is_empty());
}

#[test]
fn test_queued_result_after_cancel_is_ignored() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("prompt".to_string());
    state.cancel_in_flight_request();

    response_tx
        .send(AiResponse::Complete {
            text: ONE_SUGGESTION.to_string(),
            request_id: 1,
        })
        .unwrap();

    assert!(!state.poll_responses());
    assert!(state.suggestions.is_empty());
    assert!(!state.has_result);
    assert!(state.error.is_none());
}

#[test]
fn test_queued_error_after_cancel_is_ignored() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("prompt".to_string());
    state.cancel_in_flight_request();

    response_tx
        .send(AiResponse::Progress {
            chars: 12,
            request_id: 1,
        })
        .unwrap();
    response_tx
        .send(AiResponse::Error {
            message: "[DeepSeek] Network error: x".to_string(),
            request_id: 1,
        })
        .unwrap();

    assert!(!state.poll_responses());
    assert!(state.error.is_none());
    assert_eq!(state.received_chars, 0);
    assert!(!state.loading);
}

#[test]
fn test_cancel_in_flight_request() {
    let (mut state, request_rx, _response_tx) = connected_state();
    state.send_request("prompt".to_string());
    let request = request_rx.recv().unwrap();

    assert!(state.cancel_in_flight_request());
    assert!(request.cancel_token.is_cancelled());
    assert!(!state.loading);
    assert!(!state.has_in_flight_request());
    assert!(!state.cancel_in_flight_request());
}

#[test]
fn test_cancelled_response_clears_loading() {
    let mut state = AiState::new("DeepSeek", "deepseek-chat", true);
    state.request_id = 3;
    state.loading = true;

    assert!(state.handle_response(AiResponse::Cancelled { request_id: 3 }));
    assert!(!state.loading);
}

#[test]
fn test_worker_disconnect_while_loading_sets_error() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("prompt".to_string());
    drop(response_tx);

    assert!(state.poll_responses());
    assert!(state.error.is_some());
    assert!(!state.loading);
}

#[test]
fn test_new_request_clears_previous_error() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    state.set_error("old".to_string());

    state.send_request("prompt".to_string());
    assert!(state.error.is_none());
}
