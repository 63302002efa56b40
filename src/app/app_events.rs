use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus, OutputMode};
use crate::autocomplete::KeyDisposition;
use crate::templates::handle_template_picker_key;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Prompt => self.handle_prompt_key(key, now),
            Focus::TemplatePicker => handle_template_picker_key(self, key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char('c') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('q') => {
                self.output_mode = Some(OutputMode::Prompt);
                self.should_quit = true;
                true
            }
            KeyCode::Char('e') => {
                self.request_enhance();
                true
            }
            KeyCode::Char('t') => {
                if self.focus == Focus::TemplatePicker {
                    self.focus_prompt();
                } else {
                    self.open_template_picker();
                }
                true
            }
            _ => false,
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, now: Instant) {
        match self.autocomplete.handle_key(key) {
            KeyDisposition::Consumed => {}
            KeyDisposition::Accept(text) => self.accept_suggestion(&text, now),
            KeyDisposition::PassThrough => {
                if self.input.textarea.input(key) {
                    self.on_prompt_edited(now);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
