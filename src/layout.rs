//! Layout module for tracking UI component regions
//!
//! Render records where each component landed; mouse handling asks
//! `region_at()` which component is under the pointer.

use ratatui::layout::{Position, Rect};

/// A clickable part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    KeywordsPane,
    PromptInput,
    Suggestions,
    TemplatePicker,
}

/// Areas from the most recent render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub keywords_pane: Option<Rect>,
    pub prompt_input: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub template_picker: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Find the region at a screen position
///
/// Popups are checked first since they draw over the panes.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    let candidates = [
        (regions.template_picker, Region::TemplatePicker),
        (regions.suggestions, Region::Suggestions),
        (regions.prompt_input, Region::PromptInput),
        (regions.keywords_pane, Region::KeywordsPane),
    ];

    candidates
        .into_iter()
        .find(|(rect, _)| rect.is_some_and(|r| r.contains(position)))
        .map(|(_, region)| region)
}
