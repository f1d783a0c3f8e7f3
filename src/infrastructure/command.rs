//! Shared subprocess runner for the external desktop tools

use std::process::{Output, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::application::ports::ToolError;

/// Runs one external executable and captures its output
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable name or path
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the program and return its stdout.
    ///
    /// One trailing newline is stripped. A non-zero exit is a
    /// `ToolError::Failed` carrying stderr.
    pub async fn run(&self, args: &[&str]) -> Result<String, ToolError> {
        let output = self.output(args).await?;
        if !output.status.success() {
            return Err(ToolError::failed(&self.program, failure_detail(&output)));
        }
        Ok(stdout_text(&output.stdout))
    }

    /// Run the program and return the raw output, whatever the exit status
    pub async fn output(&self, args: &[&str]) -> Result<Output, ToolError> {
        // Arguments can carry clipboard contents, so only their count is logged
        debug!(program = %self.program, arg_count = args.len(), "running external command");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ToolError::not_found(&self.program)
                } else {
                    ToolError::failed(&self.program, e.to_string())
                }
            })?;

        debug!(program = %self.program, status = %output.status, "external command finished");
        Ok(output)
    }
}

fn stdout_text(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.strip_suffix('\n').unwrap_or(&text).to_string()
}

fn failure_detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("exited with status: {}", output.status)
    } else {
        stderr.to_string()
    }
}
