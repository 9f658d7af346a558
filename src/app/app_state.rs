use std::path::PathBuf;

use crate::ai::{AiState, NameSuggestion};
use crate::config::{ClipboardBackend, Config};
use crate::favorites::FavoritesState;
use crate::form::{FormState, FormValues};
use crate::help::HelpPopupState;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::speech::SpeechState;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Suggestions,
    Favorites,
}

/// Application state
pub struct App {
    pub form: FormState,
    pub ai: AiState,
    pub favorites: FavoritesState,
    pub speech: SpeechState,
    pub notification: NotificationState,
    pub help: HelpPopupState,
    pub focus: Focus,
    /// Index of the highlighted suggestion card
    pub selected_card: usize,
    pub card_scroll: ScrollState,
    /// Values of the last submitted form, reused by regenerate
    pub last_values: Option<FormValues>,
    pub export_path: PathBuf,
    /// Environment variable that supplies the API key, for the setup hint
    pub api_key_env: &'static str,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
    pub frame_count: u64,
}

impl App {
    /// Create the app without a worker; call `ai.set_channels` to connect one
    pub fn new(config: &Config) -> Self {
        let ai = AiState::new(
            config.ai.provider.display_name(),
            &config.ai.model_name(),
            config.ai.has_api_key(),
        );

        Self {
            form: FormState::new(),
            ai,
            favorites: FavoritesState::new(),
            speech: SpeechState::from_config(&config.speech),
            notification: NotificationState::new(),
            help: HelpPopupState::new(),
            focus: Focus::Form,
            selected_card: 0,
            card_scroll: ScrollState::new(),
            last_values: None,
            export_path: config.export.path(),
            api_key_env: config.ai.provider.api_key_env(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
            frame_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_suggestion(&self) -> Option<&NameSuggestion> {
        self.ai.suggestions.get(self.selected_card)
    }

    pub fn select_next_card(&mut self) {
        let count = self.ai.suggestions.len();
        if count > 0 && self.selected_card + 1 < count {
            self.selected_card += 1;
        }
    }

    pub fn select_prev_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Move focus forward: name, interests, names, favorites
    pub fn focus_next(&mut self) {
        use crate::form::FormField;

        self.focus = match (self.focus, self.form.focused) {
            (Focus::Form, FormField::Name) => {
                self.form.focused = FormField::Interests;
                Focus::Form
            }
            (Focus::Form, FormField::Interests) => Focus::Suggestions,
            (Focus::Suggestions, _) => Focus::Favorites,
            (Focus::Favorites, _) => {
                self.form.focused = FormField::Name;
                Focus::Form
            }
        };
    }

    pub fn focus_prev(&mut self) {
        use crate::form::FormField;

        self.focus = match (self.focus, self.form.focused) {
            (Focus::Form, FormField::Interests) => {
                self.form.focused = FormField::Name;
                Focus::Form
            }
            (Focus::Form, FormField::Name) => Focus::Favorites,
            (Focus::Favorites, _) => Focus::Suggestions,
            (Focus::Suggestions, _) => {
                self.form.focused = FormField::Interests;
                Focus::Form
            }
        };
    }

    /// Poll background work; returns true if anything visible changed
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if self.ai.poll_responses() {
            changed = true;
            // New results start from the first card
            if !self.ai.loading && self.ai.error.is_none() {
                self.selected_card = 0;
                self.card_scroll.jump_to_top();
            }
        }
        changed |= self.speech.poll();
        changed
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
