//! Clipboard manager port interface

use async_trait::async_trait;

use super::tool::ToolError;

/// Port for a clipboard manager that keeps a history
#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Current clipboard item (empty if none)
    async fn current(&self) -> Result<String, ToolError>;

    /// Replace the current item; the manager also pushes it onto its history
    async fn set_current(&self, text: &str) -> Result<(), ToolError>;

    /// Empty the current item without touching the history
    async fn clear_current(&self) -> Result<(), ToolError>;

    /// History entry at `index` (0 is the most recent).
    ///
    /// # Returns
    /// `None` past the end of the history
    async fn history_item(&self, index: usize) -> Result<Option<String>, ToolError>;

    /// Drop every history entry
    async fn clear_history(&self) -> Result<(), ToolError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ClipboardService for Box<dyn ClipboardService> {
    async fn current(&self) -> Result<String, ToolError> {
        self.as_ref().current().await
    }

    async fn set_current(&self, text: &str) -> Result<(), ToolError> {
        self.as_ref().set_current(text).await
    }

    async fn clear_current(&self) -> Result<(), ToolError> {
        self.as_ref().clear_current().await
    }

    async fn history_item(&self, index: usize) -> Result<Option<String>, ToolError> {
        self.as_ref().history_item(index).await
    }

    async fn clear_history(&self) -> Result<(), ToolError> {
        self.as_ref().clear_history().await
    }
}
