//! Suggestion parsing for model responses
//!
//! The model is asked to return only a JSON object of the form:
//! ```text
//! {"suggestions": [{"chineseName": "艾琳", "pinyin": "Ài Lín",
//!   "explanation": {"individual": [...], "overall": "...",
//!                   "cultural": "...", "personality": "..."}}]}
//! ```
//! In practice it sometimes wraps that object in prose or markdown fences, so
//! the object is located first and validated field by field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// =========================================================================
// Suggestion Types
// =========================================================================

/// Meaning breakdown for a suggested name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// One entry per character, in name order
    pub individual: Vec<String>,
    pub overall: String,
    pub cultural: String,
    pub personality: String,
}

/// A single generated Chinese name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSuggestion {
    pub chinese_name: String,
    pub pinyin: String,
    pub explanation: Explanation,
}

impl NameSuggestion {
    /// Pair each character of the name with its meaning
    ///
    /// Meanings beyond the number of characters are paired with `None`.
    pub fn character_meanings(&self) -> Vec<(Option<char>, &str)> {
        let mut chars = self.chinese_name.chars();
        self.explanation
            .individual
            .iter()
            .map(|meaning| (chars.next(), meaning.as_str()))
            .collect()
    }
}

/// Reasons a model response could not be turned into suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("no JSON object found in response")]
    NoJson,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("response has no \"suggestions\" array")]
    MissingSuggestions,

    #[error("suggestion {index} has a missing or invalid \"{field}\"")]
    InvalidSuggestion { index: usize, field: &'static str },
}

// =========================================================================
// Parsing Functions
// =========================================================================

/// Locate the JSON object in a model response
///
/// Returns the first balanced `{...}` span, ignoring braces inside string
/// literals. A stray `{` in surrounding prose is skipped by retrying from each
/// later `{`. When no balanced span exists (e.g. truncated output) the span
/// from the first `{` to the last `}` is returned so the JSON parser can
/// report the actual syntax error.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    for (offset, _) in text[start..].match_indices('{') {
        let candidate = start + offset;
        if let Some(end) = balanced_end(&text[candidate..]) {
            return Some(&text[candidate..candidate + end]);
        }
    }

    let last = text.rfind('}')?;
    if last < start {
        return None;
    }
    Some(&text[start..=last])
}

/// Byte length of the balanced object at the start of `text`
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse name suggestions from a model response
///
/// An empty `suggestions` array is valid and yields an empty list.
pub fn parse_suggestions(response: &str) -> Result<Vec<NameSuggestion>, SuggestionError> {
    let json = extract_json_object(response).ok_or(SuggestionError::NoJson)?;

    let value: Value =
        serde_json::from_str(json).map_err(|e| SuggestionError::InvalidJson(e.to_string()))?;

    let items = value
        .get("suggestions")
        .and_then(Value::as_array)
        .ok_or(SuggestionError::MissingSuggestions)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_suggestion(index, item))
        .collect()
}

fn parse_suggestion(index: usize, item: &Value) -> Result<NameSuggestion, SuggestionError> {
    let invalid = |field| SuggestionError::InvalidSuggestion { index, field };

    let object = item.as_object().ok_or(invalid("suggestion"))?;

    let chinese_name = non_empty_str(object, "chineseName").ok_or(invalid("chineseName"))?;
    let pinyin = non_empty_str(object, "pinyin").ok_or(invalid("pinyin"))?;

    let explanation = object
        .get("explanation")
        .and_then(Value::as_object)
        .ok_or(invalid("explanation"))?;

    let individual = explanation
        .get("individual")
        .and_then(Value::as_array)
        .and_then(|meanings| {
            meanings
                .iter()
                .map(|m| m.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .ok_or(invalid("individual"))?;

    let text_field = |field: &'static str| {
        explanation
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(invalid(field))
    };

    Ok(NameSuggestion {
        chinese_name,
        pinyin,
        explanation: Explanation {
            individual,
            overall: text_field("overall")?,
            cultural: text_field("cultural")?,
            personality: text_field("personality")?,
        },
    })
}

fn non_empty_str(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
