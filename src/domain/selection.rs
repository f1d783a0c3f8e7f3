//! Selection mode and source value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSourceError;

/// What text to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Select the word before the cursor first, then read it
    #[default]
    LastWord,
    /// Use whatever is already selected
    Selected,
}

impl SelectionMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LastWord => "last",
            Self::Selected => "selected",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where selected text is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionSource {
    /// The primary selection (highlighted text)
    #[default]
    Primary,
    /// Copy through the clipboard manager, history preserved
    Clipboard,
}

impl SelectionSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Clipboard => "clipboard",
        }
    }
}

impl FromStr for SelectionSource {
    type Err = InvalidSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "clipboard" => Ok(Self::Clipboard),
            _ => Err(InvalidSourceError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
