use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::TemplatePickerState;
use super::template_state::entry_label;
use crate::widgets::popup;

const PICKER_WIDTH: u16 = 60;
const MAX_LIST_ROWS: usize = 12;

/// Render the picker centered in `area` and return where it was drawn
pub fn render_popup(state: &TemplatePickerState, frame: &mut Frame, area: Rect) -> Rect {
    let list_rows = state.filtered_count().clamp(1, MAX_LIST_ROWS);
    // Border + filter line + separator + list
    let height = u16::try_from(list_rows).unwrap_or(u16::MAX) + 4;
    let popup_area = popup::centered_popup(area, PICKER_WIDTH, height);
    popup::clear_area(frame, popup_area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(state.filter().to_string()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            "─".repeat(popup_area.width.saturating_sub(2) as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if state.filtered_count() == 0 {
        let message = if state.is_loaded() {
            "   No matching templates"
        } else {
            "   Loading templates…"
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let selected = state.selected_index();
        let start = selected.saturating_sub(list_rows - 1);
        for (i, template) in state
            .visible_entries()
            .enumerate()
            .skip(start)
            .take(list_rows)
        {
            let label = entry_label(template);
            if i == selected {
                lines.push(Line::from(Span::styled(
                    format!("► {}", label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(Span::raw(format!("  {}", label))));
            }
        }
    }

    let title = format!(
        " Templates ({}/{}) ",
        state.filtered_count(),
        state.total_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    popup_area
}

#[cfg(test)]
#[path = "template_render_tests.rs"]
mod template_render_tests;
