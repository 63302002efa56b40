//! Mouse click handling
//!
//! Clicks accept suggestions, move focus, and blur the prompt field.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use super::app_state::{App, Focus};
use super::mouse_hover::row_in;
use crate::layout::Region;
use crate::widgets::popup;

/// Handle left mouse button press for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent, now: Instant) {
    match region {
        Some(Region::Suggestions) => click_suggestions(app, mouse, now),
        Some(Region::PromptInput) => app.focus_prompt(),
        Some(Region::TemplatePicker) => {}
        Some(Region::KeywordsPane) | None => click_outside(app),
    }
}

fn click_suggestions(app: &mut App, mouse: MouseEvent, now: Instant) {
    let Some(rect) = app.layout_regions.suggestions else {
        return;
    };
    let Some(row) = row_in(popup::inner(rect), mouse) else {
        return;
    };
    if let Some(text) = app.autocomplete.text_at_row(row) {
        app.accept_suggestion(&text, now);
    }
}

fn click_outside(app: &mut App) {
    if app.focus == Focus::TemplatePicker {
        app.focus_prompt();
    } else {
        app.blur_prompt();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
