//! Configuration domain module

mod app_config;
mod delays;
mod log_level;

pub use app_config::{
    AppConfig, DelaysConfig, LoggingConfig, ToolsConfig, UiConfig, DEFAULT_LOG_FILE,
    MAX_POPUP_TIMEOUT_SECS, VALID_NOTIFIERS,
};
pub use delays::{delay_from_secs, Delays, MAX_DELAY_SECS};
pub use log_level::LogLevel;
