//! OSC 52 clipboard backend
//!
//! Asks the terminal emulator to set the clipboard, which also works over SSH.

use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::backend::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| ClipboardError::WriteError(e.to_string()))
}

pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_utf8_round_trips() {
        let sequence = encode_osc52("艾琳 Ài Lín");
        let payload = sequence
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "艾琳 Ài Lín");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }
}
