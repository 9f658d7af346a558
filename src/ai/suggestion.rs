//! Suggestion module for the name generator
//!
//! This module provides the name suggestion types and the logic that pulls
//! them out of free-form model output.

pub mod parser;

// Re-export main types
pub use parser::{
    Explanation, NameSuggestion, SuggestionError, extract_json_object, parse_suggestions,
};
