use ratatui::{
    Frame,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::NotificationState;
use crate::widgets::popup;

const MAX_WIDTH: u16 = 50;
const MIN_WIDTH: u16 = 12;

/// Draw the current notification in the top-right corner of the frame
pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = notification.level.color();
    let text_width = u16::try_from(notification.message.width()).unwrap_or(u16::MAX);
    let width = (text_width + 4).clamp(MIN_WIDTH, MAX_WIDTH);
    let inner_width = width.saturating_sub(4).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);

    let area = popup::top_right(frame.area(), width, lines + 2);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(notification.level.title())
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(format!(" {}", notification.message))
        .block(block)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
