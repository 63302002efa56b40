use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::autocomplete::autocomplete_render;
use crate::input::input_render;
use crate::notification::render_notification;
use crate::templates::template_render;

/// Prompt field height including borders
const INPUT_HEIGHT: u16 = 7;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [keywords_area, input_area, footer_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        input_render::render_keywords(self, frame, keywords_area);
        self.layout_regions.keywords_pane = Some(keywords_area);

        input_render::render_field(self, frame, input_area);
        self.layout_regions.prompt_input = Some(input_area);

        render_footer(self, frame, footer_area);

        if self.autocomplete.is_visible() {
            self.layout_regions.suggestions = autocomplete_render::render_popup(
                self.autocomplete.state(),
                frame,
                input_area,
            );
        }

        if self.templates.is_visible() {
            let area = frame.area();
            self.layout_regions.template_picker =
                Some(template_render::render_popup(&self.templates, frame, area));
        }

        render_notification(frame, &self.notification);
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Prompt if app.autocomplete.is_visible() => &[
            ("↑↓", "select"),
            ("Enter", "accept"),
            ("Esc", "dismiss"),
        ],
        Focus::Prompt => &[
            ("Ctrl+E", "enhance"),
            ("Ctrl+T", "templates"),
            ("Ctrl+Q", "quit & print"),
            ("Ctrl+C", "quit"),
        ],
        Focus::TemplatePicker => &[
            ("type", "filter"),
            ("↑↓", "select"),
            ("Enter", "apply"),
            ("Esc", "close"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("{} ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
