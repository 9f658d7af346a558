use std::path::PathBuf;

use thiserror::Error;

use crate::ai::provider::AiError;
use crate::ai::suggestion::SuggestionError;

/// Custom error types for zhname
#[derive(Debug, Error)]
pub enum ZhnameError {
    #[error("No favorites to export")]
    NothingToExport,

    #[error("Failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error("Failed to parse name suggestions: {0}")]
    Suggestions(#[from] SuggestionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
