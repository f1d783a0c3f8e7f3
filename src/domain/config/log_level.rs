//! Log level value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLogLevelError;

/// Verbosity of the optional log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub const fn filter_directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = InvalidLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(InvalidLogLevelError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!("TRACE".parse::<LogLevel>().is_err());
    }

    #[test]
    fn filter_directives() {
        assert_eq!(LogLevel::Warning.filter_directive(), "warn");
        assert_eq!(LogLevel::Info.filter_directive(), "info");
    }
}
