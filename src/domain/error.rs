//! Domain error types

use thiserror::Error;

/// Error when parsing a layout pair string
#[derive(Debug, Clone, Error)]
#[error("Invalid layout pair: \"{input}\". Valid pairs are: en_ru, ru_en")]
pub struct InvalidLayoutError {
    pub input: String,
}

/// Error when an invalid selection source is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid selection source: \"{input}\". Valid sources are: primary, clipboard")]
pub struct InvalidSourceError {
    pub input: String,
}

/// Error when an invalid log level is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid log level: \"{input}\". Valid levels are: DEBUG, INFO, WARNING, ERROR")]
pub struct InvalidLogLevelError {
    pub input: String,
}

/// Error when a settle delay is out of range
#[derive(Debug, Clone, Error)]
#[error("Invalid delay for '{name}': {seconds}s (expected 0 to {max}s)")]
pub struct InvalidDelayError {
    pub name: &'static str,
    pub seconds: f64,
    pub max: f64,
}

/// Error when a character table cannot be used for bidirectional conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutTableError {
    #[error("Character '{0}' is mapped more than once")]
    DuplicateKey(char),

    #[error("Character '{0}' is the target of more than one key")]
    DuplicateValue(char),

    #[error("Character '{0}' is a key in both directions")]
    Overlap(char),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
