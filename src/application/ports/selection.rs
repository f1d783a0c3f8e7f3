//! Primary selection port interface

use async_trait::async_trait;

use super::tool::ToolError;

/// Port for reading the highlighted text
#[async_trait]
pub trait SelectionReader: Send + Sync {
    /// Text of the primary selection; empty when nothing is selected
    async fn primary_selection(&self) -> Result<String, ToolError>;
}
