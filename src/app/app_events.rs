use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};

impl App {
    /// Wait up to `timeout` for an input event and apply it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Suggestions => self.handle_suggestions_key(key),
            Focus::Favorites => self.handle_favorites_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup blocks all other keys while open
        if self.help.visible {
            self.handle_help_key(key);
            return true;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_prev();
                true
            }
            KeyCode::Esc => {
                if !self.cancel_generation() {
                    if self.focus == Focus::Form {
                        self.form.error = None;
                    } else {
                        self.focus = Focus::Form;
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.help.close();
            }
            KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
            KeyCode::PageDown => self.help.scroll.page_down(),
            KeyCode::PageUp => self.help.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.help.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.help.scroll.jump_to_bottom(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Up | KeyCode::Down => self.form.focus_next(),
            _ => {
                self.form.handle_key(key);
            }
        }
    }

    /// Keys shared by the suggestions and favorites panes
    /// Returns true if the key was handled
    fn handle_pane_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help.toggle(),
            KeyCode::Char('f') | KeyCode::Char(' ') => self.toggle_favorite(),
            KeyCode::Char('s') | KeyCode::Char('p') => self.speak_selected(),
            KeyCode::Char('e') => self.export_favorites(),
            KeyCode::Char('y') => self.copy_selection(),
            KeyCode::Char('r') => self.regenerate(),
            _ => return false,
        }
        true
    }

    fn handle_suggestions_key(&mut self, key: KeyEvent) {
        if self.handle_pane_key(key) {
            return;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select_prev_card(),
            KeyCode::Right | KeyCode::Char('l') => self.select_next_card(),
            KeyCode::Down | KeyCode::Char('j') => self.card_scroll.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.card_scroll.scroll_up(1),
            KeyCode::PageDown => self.card_scroll.page_down(),
            KeyCode::PageUp => self.card_scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.card_scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.card_scroll.jump_to_bottom(),
            _ => {}
        }
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) {
        if self.handle_pane_key(key) {
            return;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.favorites.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.favorites.select_prev(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_favorite(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
