//! Notification infrastructure module
//!
//! Provides freedesktop notifications through notify-rust (default)
//! or KDE passive popups through kdialog.

mod kdialog;
mod notify_rust;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub use kdialog::KdialogNotifier;
pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::Notifier;

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    #[default]
    NotifyRust,
    Kdialog,
}

impl NotifierKind {
    /// External executable the backend needs, if any
    pub const fn required_tool(&self) -> Option<&'static str> {
        match self {
            Self::NotifyRust => None,
            Self::Kdialog => Some("kdialog"),
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotifyRust => write!(f, "notify-rust"),
            Self::Kdialog => write!(f, "kdialog"),
        }
    }
}

/// Error type for parsing a notifier name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNotifierKindError {
    pub value: String,
}

impl fmt::Display for ParseNotifierKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid notifier '{}'. Valid options: notify-rust, kdialog",
            self.value
        )
    }
}

impl std::error::Error for ParseNotifierKindError {}

impl FromStr for NotifierKind {
    type Err = ParseNotifierKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notify-rust" => Ok(Self::NotifyRust),
            "kdialog" => Ok(Self::Kdialog),
            _ => Err(ParseNotifierKindError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create the notifier for `kind` with popups lasting `timeout`
pub fn create_notifier(kind: NotifierKind, timeout: Duration) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::NotifyRust => Box::new(NotifyRustNotifier::new(timeout)),
        NotifierKind::Kdialog => Box::new(KdialogNotifier::new(timeout)),
    }
}
