//! Mouse hover handling
//!
//! Hovering a suggestion row selects it.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::widgets::popup;

pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if region == Some(Region::Suggestions) {
        hover_suggestions(app, mouse);
    }
}

fn hover_suggestions(app: &mut App, mouse: MouseEvent) {
    if !app.autocomplete.is_visible() {
        return;
    }

    let Some(rect) = app.layout_regions.suggestions else {
        return;
    };

    let Some(row) = row_in(popup::inner(rect), mouse) else {
        return;
    };

    if let Some(index) = app.autocomplete.state().index_at_row(row) {
        app.autocomplete.hover(index);
    }
}

/// Row within `inner` under the pointer, if the pointer is inside it
pub(super) fn row_in(inner: ratatui::layout::Rect, mouse: MouseEvent) -> Option<usize> {
    if mouse.column < inner.x
        || mouse.column >= inner.x.saturating_add(inner.width)
        || mouse.row < inner.y
        || mouse.row >= inner.y.saturating_add(inner.height)
    {
        return None;
    }
    Some(usize::from(mouse.row - inner.y))
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
