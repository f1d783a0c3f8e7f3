//! Synthetic input port interface

use async_trait::async_trait;

use crate::domain::keys::KeySequence;

use super::tool::ToolError;

/// Port for keystroke injection into the focused window
#[async_trait]
pub trait InputInjector: Send + Sync {
    /// Send every press/release event of `keys` in order
    async fn send_keys(&self, keys: &KeySequence) -> Result<(), ToolError>;
}

/// Blanket implementation for boxed injector types
#[async_trait]
impl InputInjector for Box<dyn InputInjector> {
    async fn send_keys(&self, keys: &KeySequence) -> Result<(), ToolError> {
        self.as_ref().send_keys(keys).await
    }
}
