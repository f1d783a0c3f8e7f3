//! Dependency checker using `which`

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::DependencyChecker;

/// Looks every tool up on PATH with `which`
pub struct WhichDependencyChecker;

impl WhichDependencyChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WhichDependencyChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a tool binary is available using `which`
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

#[async_trait]
impl DependencyChecker for WhichDependencyChecker {
    async fn missing(&self, tools: &[String]) -> Vec<String> {
        let mut missing = Vec::new();
        for tool in tools {
            if !is_tool_available(tool).await {
                debug!(tool = %tool, "required tool not found");
                missing.push(tool.clone());
            }
        }
        missing
    }
}
