//! Klipper clipboard adapter over D-Bus

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{ClipboardService, ToolError};
use crate::infrastructure::command::CommandRunner;

const SERVICE: &str = "org.kde.klipper";
const OBJECT_PATH: &str = "/klipper";

/// KDE Klipper clipboard manager, reached through `qdbus`
pub struct KlipperClipboard {
    qdbus: CommandRunner,
}

impl KlipperClipboard {
    /// `qdbus` is the executable name (`qdbus6` on Plasma 6)
    pub fn new(qdbus: impl Into<String>) -> Self {
        Self {
            qdbus: CommandRunner::new(qdbus),
        }
    }

    async fn call(&self, method: &str, args: &[&str]) -> Result<String, ToolError> {
        debug!(method, "calling klipper");
        let mut full = vec![SERVICE, OBJECT_PATH, method];
        full.extend_from_slice(args);
        self.qdbus.run(&full).await
    }
}

impl Default for KlipperClipboard {
    fn default() -> Self {
        Self::new("qdbus")
    }
}

#[async_trait]
impl ClipboardService for KlipperClipboard {
    async fn current(&self) -> Result<String, ToolError> {
        self.call("getClipboardContents", &[]).await
    }

    async fn set_current(&self, text: &str) -> Result<(), ToolError> {
        self.call("setClipboardContents", &[text]).await?;
        Ok(())
    }

    async fn clear_current(&self) -> Result<(), ToolError> {
        self.call("clearClipboardContents", &[]).await?;
        Ok(())
    }

    async fn history_item(&self, index: usize) -> Result<Option<String>, ToolError> {
        let index = index.to_string();
        let item = self.call("getClipboardHistoryItem", &[&index]).await?;
        // Klipper answers past the end with an empty string
        Ok(history_entry(item))
    }

    async fn clear_history(&self) -> Result<(), ToolError> {
        self.call("clearClipboardHistory", &[]).await?;
        Ok(())
    }
}

fn history_entry(reply: String) -> Option<String> {
    if reply.is_empty() {
        None
    } else {
        Some(reply)
    }
}
