//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted settings file
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the settings file.
    ///
    /// # Returns
    /// An all-`None` config when no file exists yet
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write `config`, creating parent directories as needed
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write the default settings.
    /// Fails with `AlreadyExists` rather than overwrite.
    async fn init(&self) -> Result<(), ConfigError>;
}
