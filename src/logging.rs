//! File logging
//!
//! The terminal belongs to the TUI, so log records go to a file. Logging is
//! on when `--log-file` is given; debug builds fall back to a file in the
//! temp dir. Filtering follows `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::error::AppError;

#[cfg(debug_assertions)]
const DEFAULT_LOG_FILE: &str = "prompt-assist.log";

/// Where logs go for this run, if anywhere
pub fn log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    #[cfg(debug_assertions)]
    {
        Some(std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }

    #[cfg(not(debug_assertions))]
    {
        None
    }
}

/// Initialize the global logger. Returns the file being written, if any.
pub fn init(explicit: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
    let Some(path) = log_path(explicit) else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::Logging(format!("{}: {}", path.display(), e)))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log::info!("prompt-assist {} starting", env!("CARGO_PKG_VERSION"));
    Ok(Some(path))
}
