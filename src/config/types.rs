// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Backend server configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_server_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Autocomplete configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AutocompleteConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Quiet period after the last qualifying edit before a query is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Tokens shorter than this (in characters) never trigger a query
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    /// Drop responses that belong to an older query instead of letting the
    /// last-arriving response win
    #[serde(default)]
    pub discard_stale_responses: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            enabled: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            max_visible: DEFAULT_MAX_VISIBLE,
            discard_stale_responses: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_min_token_chars() -> usize {
    DEFAULT_MIN_TOKEN_CHARS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}
