//! Configuration loading
//!
//! Reads `~/.config/prompt-assist/config.toml` (or an explicit path) and
//! applies command-line overrides.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, DEFAULT_MAX_VISIBLE, ServerConfig};

use crate::error::AppError;

const CONFIG_DIR: &str = "prompt-assist";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// An explicit path must exist. The default path is optional: when it is
/// missing the built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AppError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ConfigNotFound(path.to_path_buf()));
            }
            load_config_from_path(path)
        }
        None => match config_path() {
            Some(path) if path.exists() => load_config_from_path(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| AppError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Apply a `--server` override, validating the scheme
pub fn apply_server_override(config: &mut Config, server: Option<&str>) -> Result<(), AppError> {
    if let Some(url) = server {
        config.server.url = url.to_string();
    }

    let url = config.server.url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::InvalidServerUrl(config.server.url.clone()));
    }
    Ok(())
}
