//! Input field rendering
//!
//! This module handles rendering of the prompt field and the keywords pane.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Focus};

/// Render the prompt field (bottom)
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Prompt {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let count = app.input.char_count();
    let mut title_spans = vec![
        Span::raw(" Prompt · "),
        Span::styled(
            format!("{} chars", count),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" "),
    ];

    if app.enhancing {
        title_spans.push(Span::styled(
            "⟳ Enhancing… ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(border_color));

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
}

/// Render the keywords pane (top)
pub fn render_keywords(app: &App, frame: &mut Frame, area: Rect) {
    let keywords = app.input.keywords();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Keywords ({}) ", keywords.len()))
        .border_style(Style::default().fg(Color::DarkGray));

    let content = if keywords.is_empty() {
        Line::from(Span::styled(
            "Separate keywords with commas",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = Vec::with_capacity(keywords.len() * 2);
        for (i, keyword) in keywords.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{}]", keyword),
                Style::default().fg(Color::Green),
            ));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
