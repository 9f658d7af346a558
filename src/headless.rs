//! One-shot generation for `--print`
//!
//! Runs a single request on the current thread and returns the parsed
//! suggestions without starting the TUI.

use tokio_util::sync::CancellationToken;

use crate::ai::NameSuggestion;
use crate::ai::prompt::{build_prompt, system_prompt};
use crate::ai::provider::ChatClient;
use crate::ai::suggestion::parse_suggestions;
use crate::config::AiConfig;
use crate::error::ZhnameError;

/// Generate names once, blocking until the model answers
pub fn generate_once(
    config: &AiConfig,
    english_name: &str,
    interests: &str,
) -> Result<Vec<NameSuggestion>, ZhnameError> {
    let (name, interests) = validate_input(english_name, interests)?;
    let client = ChatClient::from_config(config)?;
    let prompt = build_prompt(name, interests);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    log::debug!("Headless request to {} ({})", client.url(), client.model());
    let text = runtime.block_on(client.complete_with_cancel(
        system_prompt(),
        &prompt,
        CancellationToken::new(),
        |_| {},
    ))?;

    Ok(parse_suggestions(&text)?)
}

fn validate_input<'a>(
    english_name: &'a str,
    interests: &'a str,
) -> Result<(&'a str, &'a str), ZhnameError> {
    let name = english_name.trim();
    let interests = interests.trim();
    if name.is_empty() {
        return Err(ZhnameError::InvalidInput("English name is required (--name)".to_string()));
    }
    if interests.is_empty() {
        return Err(ZhnameError::InvalidInput("Interests are required (--interests)".to_string()));
    }
    Ok((name, interests))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected_before_any_request() {
        let err = generate_once(&AiConfig::default(), "  ", "music").unwrap_err();
        assert!(matches!(err, ZhnameError::InvalidInput(_)));
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn test_blank_interests_are_rejected() {
        let err = generate_once(&AiConfig::default(), "Emily", "").unwrap_err();
        assert!(err.to_string().contains("--interests"));
    }

    #[test]
    fn test_missing_key_is_not_configured() {
        let err = generate_once(&AiConfig::default(), "Emily", "music").unwrap_err();
        assert!(matches!(err, ZhnameError::Ai(_)));
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn test_validate_trims() {
        assert_eq!(validate_input(" Emily ", " music ").unwrap(), ("Emily", "music"));
    }
}
