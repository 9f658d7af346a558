use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

pub const INTERESTS_PLACEHOLDER: &str = "travel, photography";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Interests,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "English Name",
            FormField::Interests => "Interests",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            FormField::Name => FormField::Interests,
            FormField::Interests => FormField::Name,
        }
    }
}

/// Trimmed, non-empty form values ready for the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub interests: String,
}

pub struct FormState {
    pub name: TextArea<'static>,
    pub interests: TextArea<'static>,
    pub focused: FormField,
    /// Validation error from the last submit
    pub error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        let mut interests = single_line("");
        interests.set_placeholder_text(INTERESTS_PLACEHOLDER);

        Self {
            name: single_line(""),
            interests,
            focused: FormField::Name,
            error: None,
        }
    }

    /// Form pre-filled from command-line values
    pub fn with_values(name: Option<&str>, interests: Option<&str>) -> Self {
        let mut form = Self::new();
        if let Some(name) = name {
            form.name.insert_str(single_line_text(name));
        }
        if let Some(interests) = interests {
            form.interests.insert_str(single_line_text(interests));
        }
        form
    }

    pub fn name_text(&self) -> &str {
        self.name.lines()[0].as_str()
    }

    pub fn interests_text(&self) -> &str {
        self.interests.lines()[0].as_str()
    }

    pub fn field(&self, field: FormField) -> &TextArea<'static> {
        match field {
            FormField::Name => &self.name,
            FormField::Interests => &self.interests,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut TextArea<'static> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Interests => &mut self.interests,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.other();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.other();
    }

    /// Check that both fields are filled in
    ///
    /// On failure the error is stored and the first blank field is focused.
    pub fn validate(&mut self) -> Option<FormValues> {
        for field in [FormField::Name, FormField::Interests] {
            let text = self.field(field).lines()[0].trim();
            if text.is_empty() {
                self.error = Some(format!("{} is required", field.label()));
                self.focused = field;
                return None;
            }
        }

        self.error = None;
        Some(FormValues {
            name: self.name_text().trim().to_string(),
            interests: self.interests_text().trim().to_string(),
        })
    }

    /// Forward an editing key to the focused field
    ///
    /// Newlines are rejected so each field stays a single line. Returns true
    /// if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter
            || (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return false;
        }
        let focused = self.focused;
        let changed = self.field_mut(focused).input(key);
        if changed {
            self.error = None;
        }
        changed
    }

    /// Update cursor visibility so only the focused field shows one
    pub fn update_cursor_styles(&mut self, form_focused: bool) {
        for field in [FormField::Name, FormField::Interests] {
            let active = form_focused && self.focused == field;
            let style = if active {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            self.field_mut(field).set_cursor_style(style);
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn single_line(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea
}

fn single_line_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
