//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::layout::LayoutPair;
use crate::domain::selection::SelectionSource;

use super::delays::{
    delay_from_secs, Delays, DEFAULT_CLIPBOARD_GET_SECS, DEFAULT_CLIPBOARD_SET_SECS,
    DEFAULT_PASTE_SECS, DEFAULT_TEXT_PROCESS_SECS,
};
use super::log_level::LogLevel;

pub const DEFAULT_LOG_FILE: &str = "/tmp/lipunto.log";
pub const DEFAULT_POPUP_TIMEOUT_SECS: u32 = 5;
pub const MAX_POPUP_TIMEOUT_SECS: u32 = 60;
pub const DEFAULT_LAYOUT_COUNT: u32 = 2;
pub const DEFAULT_NOTIFIER: &str = "notify-rust";
pub const VALID_NOTIFIERS: &[&str] = &["notify-rust", "kdialog"];

/// Settle delays in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelaysConfig {
    pub clipboard_set: Option<f64>,
    pub clipboard_get: Option<f64>,
    pub text_process: Option<f64>,
    pub paste: Option<f64>,
}

/// Log output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub enabled: Option<bool>,
    pub level: Option<String>,
    pub file: Option<String>,
    pub console: Option<bool>,
}

/// Popup notification configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub show_popup: Option<bool>,
    pub popup_timeout: Option<u32>,
    pub notifier: Option<String>,
}

/// Names of the external executables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub qdbus: Option<String>,
    pub ydotool: Option<String>,
    pub wl_paste: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub layout: Option<String>,
    pub source: Option<String>,
    pub layout_count: Option<u32>,
    pub delays: Option<DelaysConfig>,
    pub logging: Option<LoggingConfig>,
    pub ui: Option<UiConfig>,
    pub tools: Option<ToolsConfig>,
}

/// Later value wins, field by field
fn merge_section<T>(base: Option<T>, other: Option<T>, merge: fn(T, T) -> T) -> Option<T> {
    match (base, other) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(b), Some(o)) => Some(merge(b, o)),
    }
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            layout: Some(LayoutPair::default().to_string()),
            source: Some(SelectionSource::default().to_string()),
            layout_count: Some(DEFAULT_LAYOUT_COUNT),
            delays: Some(DelaysConfig {
                clipboard_set: Some(DEFAULT_CLIPBOARD_SET_SECS),
                clipboard_get: Some(DEFAULT_CLIPBOARD_GET_SECS),
                text_process: Some(DEFAULT_TEXT_PROCESS_SECS),
                paste: Some(DEFAULT_PASTE_SECS),
            }),
            logging: Some(LoggingConfig {
                enabled: Some(false),
                level: Some(LogLevel::default().to_string()),
                file: Some(DEFAULT_LOG_FILE.to_string()),
                console: Some(false),
            }),
            ui: Some(UiConfig {
                show_popup: Some(false),
                popup_timeout: Some(DEFAULT_POPUP_TIMEOUT_SECS),
                notifier: Some(DEFAULT_NOTIFIER.to_string()),
            }),
            tools: Some(ToolsConfig {
                qdbus: Some("qdbus".to_string()),
                ydotool: Some("ydotool".to_string()),
                wl_paste: Some("wl-paste".to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            layout: other.layout.or(self.layout),
            source: other.source.or(self.source),
            layout_count: other.layout_count.or(self.layout_count),
            delays: merge_section(self.delays, other.delays, |b, o| DelaysConfig {
                clipboard_set: o.clipboard_set.or(b.clipboard_set),
                clipboard_get: o.clipboard_get.or(b.clipboard_get),
                text_process: o.text_process.or(b.text_process),
                paste: o.paste.or(b.paste),
            }),
            logging: merge_section(self.logging, other.logging, |b, o| LoggingConfig {
                enabled: o.enabled.or(b.enabled),
                level: o.level.or(b.level),
                file: o.file.or(b.file),
                console: o.console.or(b.console),
            }),
            ui: merge_section(self.ui, other.ui, |b, o| UiConfig {
                show_popup: o.show_popup.or(b.show_popup),
                popup_timeout: o.popup_timeout.or(b.popup_timeout),
                notifier: o.notifier.or(b.notifier),
            }),
            tools: merge_section(self.tools, other.tools, |b, o| ToolsConfig {
                qdbus: o.qdbus.or(b.qdbus),
                ydotool: o.ydotool.or(b.ydotool),
                wl_paste: o.wl_paste.or(b.wl_paste),
            }),
        }
    }

    /// Check every value that is set.
    ///
    /// Unset values are fine; the `*_or_default` accessors fill them in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref layout) = self.layout {
            layout
                .parse::<LayoutPair>()
                .map_err(|e| invalid("layout", e))?;
        }
        if let Some(ref source) = self.source {
            source
                .parse::<SelectionSource>()
                .map_err(|e| invalid("source", e))?;
        }
        if self.layout_count == Some(0) {
            return Err(invalid("layout_count", "Value must be at least 1"));
        }
        if let Some(ref delays) = self.delays {
            let fields = [
                ("clipboard_set", delays.clipboard_set),
                ("clipboard_get", delays.clipboard_get),
                ("text_process", delays.text_process),
                ("paste", delays.paste),
            ];
            for (name, seconds) in fields {
                if let Some(seconds) = seconds {
                    delay_from_secs(name, seconds)
                        .map_err(|e| invalid(&format!("delays.{}", name), e))?;
                }
            }
        }
        if let Some(ref level) = self.logging.as_ref().and_then(|l| l.level.clone()) {
            level
                .parse::<LogLevel>()
                .map_err(|e| invalid("logging.level", e))?;
        }
        if let Some(ref ui) = self.ui {
            if let Some(timeout) = ui.popup_timeout {
                if !(1..=MAX_POPUP_TIMEOUT_SECS).contains(&timeout) {
                    return Err(invalid(
                        "ui.popup_timeout",
                        format!("Value must be between 1 and {}", MAX_POPUP_TIMEOUT_SECS),
                    ));
                }
            }
            if let Some(ref notifier) = ui.notifier {
                if !VALID_NOTIFIERS.contains(&notifier.to_lowercase().as_str()) {
                    return Err(invalid(
                        "ui.notifier",
                        format!("Valid options: {}", VALID_NOTIFIERS.join(", ")),
                    ));
                }
            }
        }
        if let Some(ref tools) = self.tools {
            let fields = [
                ("tools.qdbus", &tools.qdbus),
                ("tools.ydotool", &tools.ydotool),
                ("tools.wl_paste", &tools.wl_paste),
            ];
            for (key, value) in fields {
                if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                    return Err(invalid(key, "Value must not be empty"));
                }
            }
        }
        Ok(())
    }

    /// Get layout pair, or en_ru if not set/invalid
    pub fn layout_or_default(&self) -> LayoutPair {
        self.layout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get selection source, or primary if not set/invalid
    pub fn source_or_default(&self) -> SelectionSource {
        self.source
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get number of configured system layouts, or 2
    pub fn layout_count_or_default(&self) -> u32 {
        self.layout_count
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_LAYOUT_COUNT)
    }

    /// Get settle delays; unset or invalid entries use their defaults
    pub fn delays_or_default(&self) -> Delays {
        let defaults = Delays::default();
        let Some(ref delays) = self.delays else {
            return defaults;
        };
        let pick = |name, value: Option<f64>, fallback| {
            value
                .and_then(|s| delay_from_secs(name, s).ok())
                .unwrap_or(fallback)
        };
        Delays {
            clipboard_set: pick("clipboard_set", delays.clipboard_set, defaults.clipboard_set),
            clipboard_get: pick("clipboard_get", delays.clipboard_get, defaults.clipboard_get),
            text_process: pick("text_process", delays.text_process, defaults.text_process),
            paste: pick("paste", delays.paste, defaults.paste),
        }
    }

    /// Get logging enabled setting, or false if not set
    pub fn logging_enabled_or_default(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.enabled)
            .unwrap_or(false)
    }

    /// Get log level, or WARNING if not set/invalid
    pub fn log_level_or_default(&self) -> LogLevel {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_ref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get log file path, or /tmp/lipunto.log if not set
    pub fn log_file_or_default(&self) -> PathBuf {
        self.logging
            .as_ref()
            .and_then(|l| l.file.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_FILE)
            .into()
    }

    /// Get console logging setting, or false if not set
    pub fn log_console_or_default(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.console)
            .unwrap_or(false)
    }

    /// Get popup setting, or false if not set
    pub fn show_popup_or_default(&self) -> bool {
        self.ui.as_ref().and_then(|u| u.show_popup).unwrap_or(false)
    }

    /// Get popup timeout in seconds, or 5 if not set/out of range
    pub fn popup_timeout_or_default(&self) -> u32 {
        self.ui
            .as_ref()
            .and_then(|u| u.popup_timeout)
            .filter(|t| (1..=MAX_POPUP_TIMEOUT_SECS).contains(t))
            .unwrap_or(DEFAULT_POPUP_TIMEOUT_SECS)
    }

    /// Get notifier name, or "notify-rust" if not set
    pub fn notifier_or_default(&self) -> &str {
        self.ui
            .as_ref()
            .and_then(|u| u.notifier.as_deref())
            .unwrap_or(DEFAULT_NOTIFIER)
    }

    /// Get qdbus executable, or "qdbus" if not set
    pub fn qdbus_or_default(&self) -> &str {
        self.tools
            .as_ref()
            .and_then(|t| t.qdbus.as_deref())
            .unwrap_or("qdbus")
    }

    /// Get ydotool executable, or "ydotool" if not set
    pub fn ydotool_or_default(&self) -> &str {
        self.tools
            .as_ref()
            .and_then(|t| t.ydotool.as_deref())
            .unwrap_or("ydotool")
    }

    /// Get wl-paste executable, or "wl-paste" if not set
    pub fn wl_paste_or_default(&self) -> &str {
        self.tools
            .as_ref()
            .and_then(|t| t.wl_paste.as_deref())
            .unwrap_or("wl-paste")
    }
}

fn invalid(key: &str, message: impl ToString) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.to_string(),
    }
}
