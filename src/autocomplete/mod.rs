pub mod autocomplete_render;
mod autocomplete_state;
mod controller;
mod debouncer;
mod insertion;
mod prompt_field;
mod token;

pub use autocomplete_state::AutocompleteState;
pub use controller::{KeyDisposition, SuggestionController};
pub use debouncer::Debouncer;
pub use insertion::splice_token;
pub use prompt_field::PromptField;
pub use token::{Token, extract_token, is_token_separator};
