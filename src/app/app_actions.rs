//! User actions triggered from key bindings

use super::app_state::{App, Focus};
use crate::ai::prompt::build_prompt;
use crate::clipboard::copy_to_clipboard;
use crate::error::ZhnameError;
use crate::favorites::{export_to_file, format_export};
use crate::form::FormValues;

impl App {
    /// Validate the form and start generating names
    ///
    /// Ignored while a request is in flight.
    pub fn submit(&mut self) {
        if self.ai.loading {
            return;
        }
        let Some(values) = self.form.validate() else {
            self.focus = Focus::Form;
            return;
        };
        self.generate(values);
    }

    /// Ask for a fresh set of names with the last submitted values
    ///
    /// Favorites are kept.
    pub fn regenerate(&mut self) {
        if self.ai.loading {
            return;
        }
        match self.last_values.clone() {
            Some(values) => self.generate(values),
            None => self.submit(),
        }
    }

    fn generate(&mut self, values: FormValues) {
        let prompt = build_prompt(&values.name, &values.interests);
        log::debug!("Generating names for {:?}", values.name);

        if self.ai.send_request(prompt) {
            self.last_values = Some(values);
            self.focus = Focus::Suggestions;
        }
    }

    /// Cancel the in-flight request
    pub fn cancel_generation(&mut self) -> bool {
        if self.ai.cancel_in_flight_request() {
            self.notification.show("Generation cancelled");
            return true;
        }
        false
    }

    /// Toggle the selected card in or out of favorites
    ///
    /// In the favorites pane this removes the selected favorite.
    pub fn toggle_favorite(&mut self) {
        if self.focus == Focus::Favorites {
            self.remove_favorite();
            return;
        }
        let Some(suggestion) = self.selected_suggestion().cloned() else {
            return;
        };
        let message = if self.favorites.toggle(&suggestion) {
            format!("Added {} to favorites", suggestion.chinese_name)
        } else {
            format!("Removed {} from favorites", suggestion.chinese_name)
        };
        self.notification.show(&message);
    }

    pub fn remove_favorite(&mut self) {
        let index = self.favorites.selected;
        if let Some(removed) = self.favorites.remove(index) {
            self.notification
                .show(&format!("Removed {} from favorites", removed.chinese_name));
        }
    }

    /// Pronounce the selected card, or the selected favorite in that pane
    pub fn speak_selected(&mut self) {
        let target = match self.focus {
            Focus::Favorites => self.favorites.selected_item(),
            _ => self.selected_suggestion(),
        };
        let Some((name, pinyin)) = target.map(|s| (s.chinese_name.clone(), s.pinyin.clone()))
        else {
            return;
        };

        if let Err(e) = self.speech.speak(&name, &pinyin) {
            self.notification.show_warning(&e.to_string());
        }
    }

    /// Write all favorites to the export file
    pub fn export_favorites(&mut self) {
        let path = self.export_path.clone();
        match export_to_file(self.favorites.items(), &path) {
            Ok(()) => {
                let count = self.favorites.len();
                let noun = if count == 1 { "name" } else { "names" };
                self.notification.show(&format!(
                    "Exported {} {} to {}",
                    count,
                    noun,
                    path.display()
                ));
            }
            Err(ZhnameError::NothingToExport) => {
                self.notification
                    .show_warning(&ZhnameError::NothingToExport.to_string());
            }
            Err(e) => {
                log::error!("{}", e);
                self.notification.show_error(&e.to_string());
            }
        }
    }

    /// Copy the selected card, or all favorites in the favorites pane
    pub fn copy_selection(&mut self) {
        let (text, label) = match self.focus {
            Focus::Favorites => {
                if self.favorites.is_empty() {
                    self.notification.show_warning("No favorites to copy");
                    return;
                }
                (
                    format_export(self.favorites.items()),
                    format!("Copied {} favorites", self.favorites.len()),
                )
            }
            _ => {
                let Some(suggestion) = self.selected_suggestion() else {
                    self.notification.show_warning("No name selected");
                    return;
                };
                (
                    format_export(std::slice::from_ref(suggestion)),
                    format!("Copied {}", suggestion.chinese_name),
                )
            }
        };

        match copy_to_clipboard(&text, self.clipboard_backend) {
            Ok(()) => self.notification.show(&label),
            Err(e) => self.notification.show_error(&e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "app_actions_tests.rs"]
mod app_actions_tests;
