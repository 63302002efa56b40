//! Wire types for the prompt endpoints
//!
//! Loose server payloads are normalized here so the rest of the app never
//! deals with absent fields.

use serde::{Deserialize, Serialize};

/// A completion candidate returned by `/prompt/suggestions`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSuggestion")]
pub struct Suggestion {
    /// Literal text spliced into the prompt
    pub text: String,
    /// Row label shown in the popup
    pub label: String,
}

#[derive(Deserialize)]
struct RawSuggestion {
    text: String,
    #[serde(default)]
    display: Option<String>,
}

impl From<RawSuggestion> for Suggestion {
    fn from(raw: RawSuggestion) -> Self {
        let label = raw
            .display
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| raw.text.clone());
        Suggestion {
            text: raw.text,
            label,
        }
    }
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            text,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionsRequest<'a> {
    pub input: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceRequest<'a> {
    pub prompt: &'a str,
}

/// Result of `/prompt/enhance`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnhanceResult {
    #[serde(default)]
    pub original: String,
    pub enhanced: String,
    #[serde(default)]
    pub added_keywords: Vec<String>,
    #[serde(default)]
    pub improvements: usize,
}

/// A prompt template from `/prompt/templates`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_category() -> String {
    "Other".to_string()
}

fn default_placeholder() -> String {
    "subject".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub templates: Vec<Template>,
}

#[derive(Debug, Serialize)]
pub struct ApplyTemplateRequest<'a> {
    pub template_id: &'a str,
    pub subject: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppliedTemplate {
    #[serde(default)]
    pub template_name: String,
    pub generated_prompt: String,
}

/// Error payload on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
