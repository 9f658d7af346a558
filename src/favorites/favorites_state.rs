use crate::ai::NameSuggestion;

/// Favorites kept for the current session, in the order they were added
#[derive(Debug, Default)]
pub struct FavoritesState {
    items: Vec<NameSuggestion>,
    pub selected: usize,
}

impl FavoritesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[NameSuggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_favorite(&self, chinese_name: &str) -> bool {
        self.items.iter().any(|f| f.chinese_name == chinese_name)
    }

    /// Add the suggestion, or remove the favorite with the same Chinese name
    ///
    /// Returns true if the suggestion is a favorite afterwards.
    pub fn toggle(&mut self, suggestion: &NameSuggestion) -> bool {
        if let Some(index) = self
            .items
            .iter()
            .position(|f| f.chinese_name == suggestion.chinese_name)
        {
            self.remove(index);
            false
        } else {
            self.items.push(suggestion.clone());
            true
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<NameSuggestion> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.clamp_selection();
        Some(removed)
    }

    pub fn selected_item(&self) -> Option<&NameSuggestion> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.items.len() - 1);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "favorites_state_tests.rs"]
mod favorites_state_tests;
