//! Clipboard support
//!
//! Copies name cards and favorites as plain text, through the system
//! clipboard or OSC 52 escape sequences for remote terminals.

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, copy_to_clipboard};
