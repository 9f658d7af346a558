//! Tests for form_state

use super::*;
use crate::test_utils::test_helpers::key;

#[test]
fn test_new_form_is_empty() {
    let form = FormState::new();
    assert_eq!(form.name_text(), "");
    assert_eq!(form.interests_text(), "");
    assert_eq!(form.focused, FormField::Name);
    assert!(form.error.is_none());
}

#[test]
fn test_with_values_prefills() {
    let form = FormState::with_values(Some("Emily"), Some("travel, photography"));
    assert_eq!(form.name_text(), "Emily");
    assert_eq!(form.interests_text(), "travel, photography");
}

#[test]
fn test_with_values_flattens_newlines() {
    let form = FormState::with_values(Some("Emily\nRose"), None);
    assert_eq!(form.name_text(), "Emily Rose");
    assert_eq!(form.name.lines().len(), 1);
}

#[test]
fn test_validate_trims_values() {
    let mut form = FormState::with_values(Some("  Emily "), Some(" music\t"));
    let values = form.validate().unwrap();
    assert_eq!(values.name, "Emily");
    assert_eq!(values.interests, "music");
    assert!(form.error.is_none());
}

#[test]
fn test_validate_blank_name() {
    let mut form = FormState::with_values(Some("   "), Some("music"));
    form.focused = FormField::Interests;

    assert!(form.validate().is_none());
    assert_eq!(form.error.as_deref(), Some("English Name is required"));
    assert_eq!(form.focused, FormField::Name);
}

#[test]
fn test_validate_blank_interests() {
    let mut form = FormState::with_values(Some("Emily"), None);

    assert!(form.validate().is_none());
    assert_eq!(form.error.as_deref(), Some("Interests is required"));
    assert_eq!(form.focused, FormField::Interests);
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut form = FormState::new();
    assert!(form.handle_key(key(KeyCode::Char('E'))));
    form.focus_next();
    assert!(form.handle_key(key(KeyCode::Char('m'))));

    assert_eq!(form.name_text(), "E");
    assert_eq!(form.interests_text(), "m");
}

#[test]
fn test_enter_does_not_add_line() {
    let mut form = FormState::with_values(Some("Emily"), None);
    assert!(!form.handle_key(key(KeyCode::Enter)));
    assert_eq!(form.name.lines().len(), 1);
}

#[test]
fn test_typing_clears_error() {
    let mut form = FormState::new();
    form.validate();
    assert!(form.error.is_some());

    form.handle_key(key(KeyCode::Char('E')));
    assert!(form.error.is_none());
}

#[test]
fn test_focus_cycles() {
    let mut form = FormState::new();
    form.focus_next();
    assert_eq!(form.focused, FormField::Interests);
    form.focus_next();
    assert_eq!(form.focused, FormField::Name);
    form.focus_prev();
    assert_eq!(form.focused, FormField::Interests);
}
