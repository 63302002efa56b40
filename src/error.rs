use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for prompt-assist
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid server URL '{0}': expected http:// or https://")]
    InvalidServerUrl(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
