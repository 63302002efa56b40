use std::sync::mpsc::Receiver;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;

use crate::autocomplete::{PromptField, SuggestionController};
use crate::backend::{BackendRequest, BackendResponse};
use crate::config::Config;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::templates::TemplatePickerState;

/// Which component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    TemplatePicker,
}

/// What to output when exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the composed prompt (Ctrl+Q)
    Prompt,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub autocomplete: SuggestionController,
    pub templates: TemplatePickerState,
    pub notification: NotificationState,
    pub focus: Focus,
    /// An enhance request is in flight
    pub enhancing: bool,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    pub output_mode: Option<OutputMode>,
    request_tx: Option<UnboundedSender<BackendRequest>>,
    response_rx: Option<Receiver<BackendResponse>>,
}

impl App {
    pub fn new(config: &Config, initial_prompt: &str) -> Self {
        Self {
            input: InputState::new(initial_prompt),
            autocomplete: SuggestionController::new(&config.autocomplete),
            templates: TemplatePickerState::new(),
            notification: NotificationState::new(),
            focus: Focus::Prompt,
            enhancing: false,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            output_mode: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Wire the app to the backend worker and request the template catalog
    pub fn connect_backend(
        &mut self,
        request_tx: UnboundedSender<BackendRequest>,
        response_rx: Receiver<BackendResponse>,
    ) {
        self.autocomplete.set_channel(request_tx.clone());
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
        self.send_request(BackendRequest::LoadTemplates);
    }

    /// Returns false if the worker is not connected or has gone away
    pub(crate) fn send_request(&mut self, request: BackendRequest) -> bool {
        let Some(tx) = &self.request_tx else {
            log::debug!("No backend connected, dropping {:?}", request);
            return false;
        };
        match tx.send(request) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Backend worker gone: {:?}", e.0);
                false
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Current prompt text
    pub fn prompt(&self) -> String {
        self.input.text()
    }

    /// Periodic work: debounce deadlines, backend responses, notification expiry
    pub fn tick(&mut self, now: Instant) {
        self.autocomplete.poll(now);

        let responses: Vec<BackendResponse> = match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for response in responses {
            self.handle_backend_response(response);
        }

        self.notification.expire(now);
    }

    /// Notify listeners that the prompt changed as if typed
    pub(crate) fn on_prompt_edited(&mut self, now: Instant) {
        self.autocomplete.on_text_changed(&self.input, now);
    }

    /// Accept a suggestion into the prompt and return focus to it
    pub fn accept_suggestion(&mut self, text: &str, now: Instant) {
        self.autocomplete.accept(&mut self.input, text);
        self.focus = Focus::Prompt;
        self.on_prompt_edited(now);
    }

    /// Replace the whole prompt, cursor at the end
    ///
    /// Wholesale replacement is not a typed edit: no query is scheduled and
    /// any pending one is dropped.
    pub fn set_prompt(&mut self, text: &str) {
        self.input.set_text_and_cursor(text, text.chars().count());
        self.autocomplete.dismiss();
    }

    /// Focus left the prompt field
    pub fn blur_prompt(&mut self) {
        self.autocomplete.dismiss();
    }

    pub fn focus_prompt(&mut self) {
        if self.focus != Focus::Prompt {
            self.templates.close();
            self.focus = Focus::Prompt;
        }
    }

    pub fn open_template_picker(&mut self) {
        if !self.templates.is_loaded() {
            self.send_request(BackendRequest::LoadTemplates);
        }
        self.blur_prompt();
        self.templates.open();
        self.focus = Focus::TemplatePicker;
    }

    /// Send the selected template with the trimmed prompt as its subject
    pub fn apply_selected_template(&mut self) {
        let Some(template) = self.templates.selected_template() else {
            return;
        };
        let request = BackendRequest::ApplyTemplate {
            template_id: template.id.clone(),
            subject: self.prompt().trim().to_string(),
        };
        log::info!("Applying template {}", template.id);
        self.send_request(request);
    }

    /// Ask the backend to enhance the prompt (Ctrl+E)
    pub fn request_enhance(&mut self) {
        if self.enhancing {
            return;
        }

        let prompt = self.prompt();
        let prompt = prompt.trim();
        if prompt.is_empty() {
            self.notification.warning("Enter a prompt to enhance first");
            return;
        }

        if self.send_request(BackendRequest::Enhance {
            prompt: prompt.to_string(),
        }) {
            self.enhancing = true;
        } else {
            self.notification.error("Backend is not available");
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
