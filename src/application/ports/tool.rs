//! Shared error for ports backed by external tools

use thiserror::Error;

/// Failure of an external tool.
///
/// Callers branch on the variant: a missing tool is a dependency problem,
/// a failing tool is a command problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("{tool} not found. Make sure it is installed and on PATH.")]
    NotFound { tool: String },

    #[error("{tool} failed: {detail}")]
    Failed { tool: String, detail: String },
}

impl ToolError {
    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::NotFound { tool: tool.into() }
    }

    pub fn failed(tool: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Failed {
            tool: tool.into(),
            detail: detail.into(),
        }
    }

    /// Name of the tool that failed
    pub fn tool(&self) -> &str {
        match self {
            Self::NotFound { tool } | Self::Failed { tool, .. } => tool,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
