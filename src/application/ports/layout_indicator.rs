//! Keyboard layout indicator port interface

use async_trait::async_trait;

use super::tool::ToolError;

/// Port for the desktop's active keyboard layout
#[async_trait]
pub trait LayoutIndicator: Send + Sync {
    /// Switch the system to the next configured layout
    async fn advance_to_next_layout(&self) -> Result<(), ToolError>;
}
