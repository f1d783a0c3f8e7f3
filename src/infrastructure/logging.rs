//! Tracing subscriber setup
//!
//! Logging is off unless enabled in the config. When enabled, events go to
//! an append-only file through a non-blocking writer, and optionally to
//! stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use crate::domain::config::{AppConfig, LogLevel};

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install logger: {0}")]
    Init(String),
}

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    pub enabled: bool,
    pub level: LogLevel,
    pub file: PathBuf,
    pub console: bool,
}

impl LoggingOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            enabled: config.logging_enabled_or_default(),
            level: config.log_level_or_default(),
            file: config.log_file_or_default(),
            console: config.log_console_or_default(),
        }
    }
}

/// Keeps the file writer flushing until dropped at process exit
#[must_use = "dropping the guard stops the log file writer"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn disabled() -> Self {
        Self { _file: None }
    }
}

/// Install the global subscriber described by `options`
pub fn init_logging(options: &LoggingOptions) -> Result<LoggingGuard, LoggingError> {
    if !options.enabled {
        return Ok(LoggingGuard::disabled());
    }

    let env_filter = EnvFilter::new(options.level.filter_directive());

    let (file_writer, file_guard) = tracing_appender::non_blocking(open_log_file(&options.file)?);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let console_layer = options.console.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_level(true)
            .with_target(false)
    });

    registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::debug!(file = %options.file.display(), level = %options.level, "logging initialized");
    Ok(LoggingGuard {
        _file: Some(file_guard),
    })
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_error = |source| LoggingError::OpenFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)
}
