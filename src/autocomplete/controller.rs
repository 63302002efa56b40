//! Suggestion controller
//!
//! Turns edits of the prompt field into debounced backend queries, keeps the
//! suggestion list, and resolves keys and pointer events against it.

use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use super::autocomplete_state::AutocompleteState;
use super::debouncer::Debouncer;
use super::insertion::insert_at_cursor;
use super::prompt_field::PromptField;
use super::token::extract_token;
use crate::backend::{BackendError, BackendRequest, Suggestion};
use crate::config::AutocompleteConfig;

/// What the host should do with a key after the controller has seen it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Handled; the field must not see the key
    Consumed,
    /// Accept this text; the field must not see the key
    Accept(String),
    /// Not ours; let the field handle it normally
    PassThrough,
}

pub struct SuggestionController {
    state: AutocompleteState,
    debouncer: Debouncer<String>,
    enabled: bool,
    min_token_chars: usize,
    discard_stale_responses: bool,
    request_tx: Option<UnboundedSender<BackendRequest>>,
    /// Id of the most recently dispatched query
    last_request_id: u64,
}

impl SuggestionController {
    pub fn new(config: &AutocompleteConfig) -> Self {
        Self {
            state: AutocompleteState::with_max_visible(config.max_visible),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            enabled: config.enabled,
            min_token_chars: config.min_token_chars,
            discard_stale_responses: config.discard_stale_responses,
            request_tx: None,
            last_request_id: 0,
        }
    }

    /// Set the channel queries are dispatched on
    pub fn set_channel(&mut self, request_tx: UnboundedSender<BackendRequest>) {
        self.request_tx = Some(request_tx);
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn has_pending_query(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    /// React to an edit of the field
    ///
    /// Short tokens cancel any scheduled query and hide the popup at once;
    /// anything longer (re)starts the quiet period for that token.
    pub fn on_text_changed<F: PromptField + ?Sized>(&mut self, field: &F, now: Instant) {
        if !self.enabled {
            return;
        }

        let token = extract_token(&field.text(), field.cursor_offset());
        if token.char_len() < self.min_token_chars {
            self.debouncer.cancel();
            self.state.hide();
            return;
        }

        self.debouncer.schedule(token.text, now);
    }

    /// Dispatch the scheduled query once its quiet period has passed
    ///
    /// Returns true if a request was sent.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(token) = self.debouncer.take_due(now) else {
            return false;
        };

        let Some(tx) = &self.request_tx else {
            log::debug!("No backend connected, dropping suggestion query {:?}", token);
            return false;
        };

        let request_id = self.last_request_id.wrapping_add(1);
        if tx
            .send(BackendRequest::Suggest {
                token: token.clone(),
                request_id,
            })
            .is_err()
        {
            log::warn!("Backend worker gone, suggestion query {:?} not sent", token);
            return false;
        }

        self.last_request_id = request_id;
        log::debug!("Sent suggestion query {} for {:?}", request_id, token);
        true
    }

    /// Apply a finished query
    ///
    /// Whatever arrives last wins unless stale responses are discarded.
    /// Empty results and failures both just hide the popup.
    pub fn handle_suggestions(
        &mut self,
        request_id: u64,
        result: Result<Vec<Suggestion>, BackendError>,
    ) {
        if self.discard_stale_responses && request_id != self.last_request_id {
            log::debug!(
                "Ignoring stale suggestions {} (latest: {})",
                request_id,
                self.last_request_id
            );
            return;
        }

        match result {
            Ok(suggestions) => {
                log::debug!(
                    "Suggestions {}: {} result(s)",
                    request_id,
                    suggestions.len()
                );
                self.state.replace_suggestions(suggestions);
            }
            Err(e) => {
                log::warn!("Suggestion query {} failed: {}", request_id, e);
                self.state.hide();
            }
        }
    }

    /// Resolve a key while the popup is open
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyDisposition {
        if !self.state.is_visible() {
            return KeyDisposition::PassThrough;
        }

        match key.code {
            KeyCode::Down => {
                self.state.select_next();
                KeyDisposition::Consumed
            }
            KeyCode::Up => {
                self.state.select_previous();
                KeyDisposition::Consumed
            }
            KeyCode::Enter => match self.state.selected() {
                Some(suggestion) => KeyDisposition::Accept(suggestion.text.clone()),
                None => KeyDisposition::PassThrough,
            },
            KeyCode::Esc => {
                self.state.hide();
                KeyDisposition::Consumed
            }
            _ => KeyDisposition::PassThrough,
        }
    }

    /// Pointer entered a row
    pub fn hover(&mut self, index: usize) {
        if self.state.is_visible() {
            self.state.select_index(index);
        }
    }

    /// Text of the suggestion at a popup row, if any
    pub fn text_at_row(&self, row: usize) -> Option<String> {
        if !self.state.is_visible() {
            return None;
        }
        self.state
            .index_at_row(row)
            .and_then(|i| self.state.suggestions().get(i))
            .map(|s| s.text.clone())
    }

    /// Splice `text` over the token at the field's current cursor and hide
    ///
    /// The caller reports the edit back through `on_text_changed`, exactly
    /// as if it had been typed.
    pub fn accept<F: PromptField + ?Sized>(&mut self, field: &mut F, text: &str) {
        insert_at_cursor(field, text);
        self.state.hide();
    }

    /// Hide the popup (Esc)
    pub fn hide(&mut self) {
        self.state.hide();
    }

    /// Hide and forget any scheduled query (focus left the field, or the
    /// text was replaced wholesale)
    pub fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.state.hide();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
