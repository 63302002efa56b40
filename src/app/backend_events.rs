//! Backend response routing
//!
//! Applies worker responses drained on each tick to the UI state.

use super::app_state::{App, Focus};
use crate::backend::BackendResponse;

impl App {
    pub(crate) fn handle_backend_response(&mut self, response: BackendResponse) {
        match response {
            BackendResponse::Suggestions { request_id, result } => {
                if self.focus != Focus::Prompt {
                    log::debug!("Dropping suggestions {} while prompt is blurred", request_id);
                    return;
                }
                self.autocomplete.handle_suggestions(request_id, result);
            }
            BackendResponse::Enhanced(result) => {
                self.enhancing = false;
                match result {
                    Ok(enhanced) => {
                        self.set_prompt(&enhanced.enhanced);
                        if enhanced.improvements > 0 {
                            self.notification.success(&format!(
                                "Enhanced with {} keyword(s): {}",
                                enhanced.improvements,
                                enhanced.added_keywords.join(", ")
                            ));
                        } else {
                            self.notification.info("Prompt already looks complete");
                        }
                    }
                    Err(e) => {
                        log::warn!("Enhance failed: {}", e);
                        self.notification.error(&format!("Enhance failed: {}", e));
                    }
                }
            }
            BackendResponse::Templates(result) => match result {
                Ok(catalog) => {
                    log::info!("Loaded {} template(s)", catalog.templates.len());
                    self.templates.set_templates(catalog.templates);
                }
                Err(e) => log::warn!("Failed to load templates: {}", e),
            },
            BackendResponse::TemplateApplied(result) => match result {
                Ok(applied) => {
                    self.set_prompt(&applied.generated_prompt);
                    self.notification
                        .success(&format!("Applied template: {}", applied.template_name));
                }
                Err(e) => {
                    log::warn!("Apply template failed: {}", e);
                    self.notification
                        .error(&format!("Apply template failed: {}", e));
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "backend_events_tests.rs"]
mod backend_events_tests;
