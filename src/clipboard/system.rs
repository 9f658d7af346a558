//! System clipboard backend (arboard)

use arboard::Clipboard;

use super::backend::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    Clipboard::new()
        .map_err(|e| ClipboardError::SystemUnavailable(e.to_string()))?
        .set_text(text)
        .map_err(|e| ClipboardError::WriteError(e.to_string()))
}
