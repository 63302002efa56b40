use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

/// Keys while the template picker has focus
pub fn handle_template_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => close_picker(app),
        KeyCode::Up => app.templates.select_prev(),
        KeyCode::Down => app.templates.select_next(),
        KeyCode::Enter => {
            app.apply_selected_template();
            close_picker(app);
        }
        KeyCode::Backspace => app.templates.pop_filter_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.templates.push_filter_char(c);
        }
        _ => {}
    }
}

fn close_picker(app: &mut App) {
    app.templates.close();
    app.focus = Focus::Prompt;
}

#[cfg(test)]
#[path = "template_events_tests.rs"]
mod template_events_tests;
