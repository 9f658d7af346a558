//! SSE (Server-Sent Events) parsing for streamed chat completions
//!
//! Handles buffering and line splitting, with the JSON extraction behind the
//! SseEventParser trait.

use bytes::Bytes;

/// Extracts text from the `data:` payload of one SSE event
pub trait SseEventParser: Send + Sync {
    /// Returns None if the event doesn't contain text or parsing fails.
    fn parse_data(&self, data: &str) -> Option<String>;

    /// Check if this event signals the end of the stream
    fn is_done(&self, data: &str) -> bool {
        data == "[DONE]"
    }
}

/// SSE line buffer and event splitter
///
/// Incomplete lines (and incomplete UTF-8 sequences) are carried over to the
/// next chunk.
pub struct SseParser<P: SseEventParser> {
    pending: Vec<u8>,
    buffer: String,
    done: bool,
    parser: P,
}

impl<P: SseEventParser> SseParser<P> {
    pub fn new(parser: P) -> Self {
        Self {
            pending: Vec::new(),
            buffer: String::new(),
            done: false,
            parser,
        }
    }

    /// Whether the end-of-stream marker has been seen
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Parse a chunk of bytes and return the extracted text pieces
    pub fn parse_chunk(&mut self, bytes: &Bytes) -> Vec<String> {
        let mut results = Vec::new();
        if self.done {
            return results;
        }

        self.pending.extend_from_slice(bytes);
        self.decode_pending();

        while let Some(newline_pos) = self.buffer.find('\n') {
            let line = self.buffer[..newline_pos].trim().to_string();
            self.buffer.drain(..=newline_pos);

            if line.is_empty() || line.starts_with("event:") || line.starts_with(':') {
                continue;
            }

            let Some(data) = line.strip_prefix("data:") else {
                continue;
            };
            let data = data.trim_start();

            if self.parser.is_done(data) {
                self.done = true;
                break;
            }

            if let Some(text) = self.parser.parse_data(data)
                && !text.is_empty()
            {
                results.push(text);
            }
        }

        results
    }

    /// Move complete UTF-8 from `pending` into the line buffer
    ///
    /// Invalid sequences are dropped; a trailing partial character stays in
    /// `pending` for the next chunk.
    fn decode_pending(&mut self) {
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    self.buffer.push_str(text);
                    self.pending.clear();
                    return;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    if let Ok(text) = std::str::from_utf8(&self.pending[..valid]) {
                        self.buffer.push_str(text);
                    }
                    match e.error_len() {
                        // error_len() is None when the input merely ends mid-character
                        None => {
                            self.pending.drain(..valid);
                            return;
                        }
                        Some(len) => {
                            log::debug!("Dropping {} bytes of invalid UTF-8", len);
                            self.pending.drain(..valid + len);
                        }
                    }
                }
            }
        }
    }
}

/// OpenAI-compatible chat completion delta events
///
/// `{"choices":[{"delta":{"content":"..."}}]}`
pub struct OpenAiEventParser;

impl SseEventParser for OpenAiEventParser {
    fn parse_data(&self, data: &str) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(data).ok()?;

        json.get("choices")?
            .get(0)?
            .get("delta")?
            .get("content")?
            .as_str()
            .map(|s| s.to_string())
    }
}

#[cfg(test)]
#[path = "sse_tests.rs"]
mod sse_tests;
