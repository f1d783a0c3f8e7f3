//! KDE keyboard layout adapter over D-Bus

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{LayoutIndicator, ToolError};
use crate::infrastructure::command::CommandRunner;

const SERVICE: &str = "org.kde.keyboard";
const OBJECT_PATH: &str = "/Layouts";

/// Cycles the Plasma keyboard layout through `qdbus`
pub struct KdeLayoutIndicator {
    qdbus: CommandRunner,
    layout_count: u32,
}

impl KdeLayoutIndicator {
    /// `layout_count` is the number of layouts configured in Plasma
    pub fn new(qdbus: impl Into<String>, layout_count: u32) -> Self {
        Self {
            qdbus: CommandRunner::new(qdbus),
            layout_count: layout_count.max(1),
        }
    }

    async fn current_layout(&self) -> Result<u32, ToolError> {
        let reply = self.qdbus.run(&[SERVICE, OBJECT_PATH, "getLayout"]).await?;
        reply.trim().parse().map_err(|_| {
            ToolError::failed(
                self.qdbus.program(),
                format!("unexpected layout index '{}'", reply.trim()),
            )
        })
    }
}

impl Default for KdeLayoutIndicator {
    fn default() -> Self {
        Self::new("qdbus", 2)
    }
}

fn next_layout(current: u32, layout_count: u32) -> u32 {
    let count = layout_count.max(1);
    (current % count + 1) % count
}

#[async_trait]
impl LayoutIndicator for KdeLayoutIndicator {
    async fn advance_to_next_layout(&self) -> Result<(), ToolError> {
        let current = self.current_layout().await?;
        let next = next_layout(current, self.layout_count);
        debug!(current, next, "switching keyboard layout");

        let next = next.to_string();
        self.qdbus
            .run(&[SERVICE, OBJECT_PATH, "setLayout", &next])
            .await?;
        Ok(())
    }
}
