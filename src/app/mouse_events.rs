//! Mouse event routing
//!
//! Resolves the region under the pointer and hands off to the hover and
//! click handlers.

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use super::{mouse_click, mouse_hover};
use crate::layout::region_at;

impl App {
    pub(crate) fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse, now)
            }
            _ => {}
        }
    }
}
