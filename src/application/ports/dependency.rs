//! Dependency check port interface

use async_trait::async_trait;

/// Port for checking that external tools are installed
#[async_trait]
pub trait DependencyChecker: Send + Sync {
    /// Tools from `tools` that cannot be found, in the given order
    async fn missing(&self, tools: &[String]) -> Vec<String>;

    /// Whether every tool in `tools` can be found
    async fn all_present(&self, tools: &[String]) -> bool {
        self.missing(tools).await.is_empty()
    }
}
