//! Layout pair value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{InvalidLayoutError, LayoutTableError};

use super::table::{LayoutTable, EN_RU};

/// Keyboard layouts with a built-in character table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutId {
    En,
    Ru,
}

impl LayoutId {
    /// Get the string identifier for this layout
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered pair of layouts: text is assumed typed in `source` when it
/// should have been typed in `target`.
///
/// Conversion is bidirectional per character, so the order only decides
/// which map is consulted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutPair {
    source: LayoutId,
    target: LayoutId,
}

impl LayoutPair {
    /// English to Russian
    pub const EN_RU: Self = Self {
        source: LayoutId::En,
        target: LayoutId::Ru,
    };

    /// Russian to English
    pub const RU_EN: Self = Self {
        source: LayoutId::Ru,
        target: LayoutId::En,
    };

    pub const fn source(&self) -> LayoutId {
        self.source
    }

    pub const fn target(&self) -> LayoutId {
        self.target
    }

    /// Build the character table oriented source -> target
    pub fn table(&self) -> Result<LayoutTable, LayoutTableError> {
        let en_ru = LayoutTable::from_pairs(EN_RU)?;
        Ok(match self.source {
            LayoutId::En => en_ru,
            LayoutId::Ru => en_ru.inverted(),
        })
    }

    /// Convert text with this pair's table
    pub fn convert(&self, text: &str) -> Result<String, LayoutTableError> {
        Ok(self.table()?.convert(text))
    }
}

impl Default for LayoutPair {
    fn default() -> Self {
        Self::EN_RU
    }
}

impl FromStr for LayoutPair {
    type Err = InvalidLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "en_ru" => Ok(Self::EN_RU),
            "ru_en" => Ok(Self::RU_EN),
            _ => Err(InvalidLayoutError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LayoutPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.source, self.target)
    }
}
