use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::autocomplete::PromptField;

const PLACEHOLDER: &str = "Describe the image, e.g. a red fox in the snow, golden hour";

/// Prompt field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    /// Create a new InputState holding `text`, cursor at the end
    pub fn new(text: &str) -> Self {
        let mut textarea = TextArea::new(text.split('\n').map(str::to_string).collect());
        Self::configure(&mut textarea);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    pub fn char_count(&self) -> usize {
        let lines = self.textarea.lines();
        lines.iter().map(|l| l.chars().count()).sum::<usize>() + lines.len().saturating_sub(1)
    }

    /// Comma-separated keywords of the prompt, trimmed, empties dropped
    pub fn keywords(&self) -> Vec<String> {
        self.text()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn configure(textarea: &mut TextArea<'static>) {
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}

impl PromptField for InputState {
    fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    fn cursor_offset(&self) -> usize {
        let (row, col) = self.textarea.cursor();
        let lines = self.textarea.lines();
        let before: usize = lines
            .iter()
            .take(row)
            .map(|l| l.chars().count() + 1)
            .sum();
        before + col
    }

    /// Splice only the changed span so the edit lands on the undo stack
    fn set_text_and_cursor(&mut self, text: &str, cursor: usize) {
        let old = self.text();
        let (start, removed, inserted) = changed_span(&old, text);

        if removed > 0 || !inserted.is_empty() {
            let (row, col) = row_col_for_offset(self.textarea.lines(), start);
            self.textarea.cancel_selection();
            jump(&mut self.textarea, row, col);
            self.textarea.delete_str(removed);
            self.textarea.insert_str(inserted);
        }

        let (row, col) = row_col_for_offset(self.textarea.lines(), cursor);
        jump(&mut self.textarea, row, col);
    }
}

fn jump(textarea: &mut TextArea<'static>, row: usize, col: usize) {
    textarea.move_cursor(CursorMove::Jump(
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(col).unwrap_or(u16::MAX),
    ));
}

/// Char offset where `old` and `new` diverge, chars of `old` to remove
/// there, and the replacement slice of `new`
fn changed_span<'a>(old: &str, new: &'a str) -> (usize, usize, &'a str) {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    let prefix = old_chars
        .iter()
        .zip(&new_chars)
        .take_while(|(a, b)| a == b)
        .count();
    let max_suffix = old_chars.len().min(new_chars.len()) - prefix;
    let suffix = old_chars
        .iter()
        .rev()
        .zip(new_chars.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let removed = old_chars.len() - prefix - suffix;
    let start_byte = new.char_indices().nth(prefix).map_or(new.len(), |(i, _)| i);
    let end_byte = new
        .char_indices()
        .nth(new_chars.len() - suffix)
        .map_or(new.len(), |(i, _)| i);
    (prefix, removed, &new[start_byte..end_byte])
}

/// Map a flat character offset to (row, column), clamped to the text
fn row_col_for_offset(lines: &[String], offset: usize) -> (usize, usize) {
    let mut remaining = offset;
    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if remaining <= len {
            return (row, remaining);
        }
        remaining -= len + 1;
    }
    let last = lines.len().saturating_sub(1);
    (last, lines.get(last).map_or(0, |l| l.chars().count()))
}
