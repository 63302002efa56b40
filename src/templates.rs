//! Prompt template picker
//!
//! Lists the templates served by the backend, filters them as the user
//! types and applies the chosen one to the current prompt.

mod template_events;
mod template_matcher;
pub mod template_render;
mod template_state;

pub use template_events::handle_template_picker_key;
pub use template_matcher::TemplateMatcher;
pub use template_state::TemplatePickerState;
