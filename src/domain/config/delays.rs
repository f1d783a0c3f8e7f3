//! Settle delays between external steps

use std::time::Duration;

use crate::domain::error::InvalidDelayError;

/// Longest accepted settle delay, in seconds
pub const MAX_DELAY_SECS: f64 = 10.0;

pub const DEFAULT_CLIPBOARD_SET_SECS: f64 = 0.05;
pub const DEFAULT_CLIPBOARD_GET_SECS: f64 = 0.1;
pub const DEFAULT_TEXT_PROCESS_SECS: f64 = 0.2;
pub const DEFAULT_PASTE_SECS: f64 = 0.1;

/// Fixed waits that give the focused application time to react.
///
/// There is no event to wait on, so each step sleeps for a configured time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    /// After each transient clipboard write
    pub clipboard_set: Duration,
    /// After the copy keystroke, before reading the clipboard
    pub clipboard_get: Duration,
    /// After selecting the previous word, before reading the selection
    pub text_process: Duration,
    /// After the paste keystroke, before restoring the clipboard
    pub paste: Duration,
}

impl Delays {
    /// All waits disabled
    pub const fn none() -> Self {
        Self {
            clipboard_set: Duration::ZERO,
            clipboard_get: Duration::ZERO,
            text_process: Duration::ZERO,
            paste: Duration::ZERO,
        }
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            clipboard_set: Duration::from_secs_f64(DEFAULT_CLIPBOARD_SET_SECS),
            clipboard_get: Duration::from_secs_f64(DEFAULT_CLIPBOARD_GET_SECS),
            text_process: Duration::from_secs_f64(DEFAULT_TEXT_PROCESS_SECS),
            paste: Duration::from_secs_f64(DEFAULT_PASTE_SECS),
        }
    }
}

/// Validate a delay given in seconds
pub fn delay_from_secs(name: &'static str, seconds: f64) -> Result<Duration, InvalidDelayError> {
    if !seconds.is_finite() || !(0.0..=MAX_DELAY_SECS).contains(&seconds) {
        return Err(InvalidDelayError {
            name,
            seconds,
            max: MAX_DELAY_SECS,
        });
    }
    Ok(Duration::from_secs_f64(seconds))
}
