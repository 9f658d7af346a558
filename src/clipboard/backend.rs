//! Clipboard backend selection and error types

use thiserror::Error;

use super::{osc52, system};
use crate::config::ClipboardBackend;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("System clipboard is not available: {0}")]
    SystemUnavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteError(String),
}

/// Copy text using the configured backend
///
/// `Auto` tries the system clipboard first and falls back to OSC 52.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("{}, falling back to OSC 52", e);
            osc52::copy(text)
        }),
    }
}
