use std::ops::Range;

use crate::backend::Suggestion;
use crate::config::DEFAULT_MAX_VISIBLE;

/// Suggestion list, selection and scroll position
///
/// `selected` is either `None` or a valid index into `suggestions`; every
/// replacement of the list and every hide resets it to `None` and scrolls
/// back to the top. Only keyboard moves scroll, so the row under a
/// stationary pointer never changes.
#[derive(Debug, Clone)]
pub struct AutocompleteState {
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    visible: bool,
    /// Index of the first drawn row
    scroll_offset: usize,
    max_visible: usize,
}

impl Default for AutocompleteState {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::with_max_visible(DEFAULT_MAX_VISIBLE)
    }

    pub fn with_max_visible(max_visible: usize) -> Self {
        Self {
            suggestions: Vec::new(),
            selected: None,
            visible: false,
            scroll_offset: 0,
            max_visible: max_visible.max(1),
        }
    }

    /// Replace the list with a fresh query result
    ///
    /// Shows the popup for a non-empty list, hides it for an empty one.
    pub fn replace_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
        self.selected = None;
        self.scroll_offset = 0;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
        self.scroll_offset = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.suggestions.get(i))
    }

    /// Move down one row, stopping at the last row
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
        self.scroll_to_selection();
    }

    /// Move up one row, stopping at the first row
    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
        self.scroll_to_selection();
    }

    /// Select a drawn row (pointer hover); rows outside the window are ignored
    ///
    /// Never scrolls.
    pub fn select_index(&mut self, index: usize) {
        if self.visible_window().contains(&index) {
            self.selected = Some(index);
        }
    }

    /// Rows currently on screen
    pub fn visible_window(&self) -> Range<usize> {
        let len = self.suggestions.len();
        let start = self.scroll_offset.min(len.saturating_sub(self.max_visible));
        start..(start + self.max_visible).min(len)
    }

    /// Suggestion index for a row inside the popup (0 = first drawn row)
    pub fn index_at_row(&self, row: usize) -> Option<usize> {
        let window = self.visible_window();
        let index = window.start + row;
        window.contains(&index).then_some(index)
    }

    /// Scroll the least distance that brings the selection into view
    fn scroll_to_selection(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + self.max_visible {
            self.scroll_offset = selected + 1 - self.max_visible;
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
