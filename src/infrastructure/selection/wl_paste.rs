//! Wayland primary selection adapter using wl-paste

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{SelectionReader, ToolError};
use crate::infrastructure::command::CommandRunner;

/// Reads the primary selection with `wl-paste --primary`
pub struct WlPasteSelection {
    wl_paste: CommandRunner,
}

impl WlPasteSelection {
    pub fn new(wl_paste: impl Into<String>) -> Self {
        Self {
            wl_paste: CommandRunner::new(wl_paste),
        }
    }
}

impl Default for WlPasteSelection {
    fn default() -> Self {
        Self::new("wl-paste")
    }
}

#[async_trait]
impl SelectionReader for WlPasteSelection {
    async fn primary_selection(&self) -> Result<String, ToolError> {
        let output = self.wl_paste.output(&["--primary", "--no-newline"]).await?;

        // wl-paste exits non-zero when there is no selection at all
        if !output.status.success() {
            debug!(status = %output.status, "no primary selection");
            return Ok(String::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
