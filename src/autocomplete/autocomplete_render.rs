//! Autocomplete popup rendering
//!
//! This module handles rendering of the suggestion popup above the prompt.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::autocomplete_state::AutocompleteState;
use crate::widgets::popup;

// Autocomplete popup display constants
const MAX_POPUP_WIDTH: usize = 60;
const MIN_POPUP_WIDTH: usize = 16;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

/// Render the suggestion popup just above `input_area`
///
/// Returns the popup area for mouse hit-testing, or None when nothing is
/// shown.
pub fn render_popup(
    state: &AutocompleteState,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !state.is_visible() {
        return None;
    }

    let suggestions = state.suggestions();
    let window = state.visible_window();
    let popup_height = (window.len() as u16) + POPUP_BORDER_HEIGHT;

    let title = if suggestions.len() > window.len() {
        format!(" Suggestions {}-{}/{} ", window.start + 1, window.end, suggestions.len())
    } else {
        " Suggestions ".to_string()
    };

    let max_label_width = suggestions
        .iter()
        .map(|s| s.label.width())
        .max()
        .unwrap_or(MIN_POPUP_WIDTH)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = ((max_label_width as u16) + POPUP_PADDING).max(title.width() as u16 + 2);

    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height == 0 || popup_area.width == 0 {
        return None;
    }

    let items: Vec<ListItem> = window
        .clone()
        .map(|i| {
            let label = &suggestions[i].label;
            let line = if Some(i) == state.selected_index() {
                Line::from(Span::styled(
                    format!("► {}", label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", label),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
