//! Name generation through an LLM chat-completion API
//!
//! `prompt` builds the request text, `provider` talks HTTP, `worker` runs
//! requests off the UI thread, `suggestion` turns the reply into
//! `NameSuggestion`s and `ai_state` holds the results for rendering.

pub mod ai_render;
pub mod ai_state;
pub mod prompt;
pub mod provider;
pub mod suggestion;
pub mod worker;

pub use ai_state::{AiRequest, AiResponse, AiState};
pub use suggestion::NameSuggestion;
