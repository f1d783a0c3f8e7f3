//! XDG config store adapter

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "lipunto";
const FILE_NAME: &str = "config.toml";

/// Written above the defaults by `config init`
const INIT_HEADER: &str = "\
# lipunto configuration
#
# Every key is optional. LIPUNTO_* environment variables override this
# file and command-line flags override both. `lipunto config list` shows
# the valid keys.

";

/// Config file at `$XDG_CONFIG_HOME/lipunto/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Store at the XDG location, falling back to `$HOME/.config`
    pub fn new() -> Self {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"));

        Self {
            path: base.join(APP_DIR).join(FILE_NAME),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the file contents; errors name the file
    fn parse_toml(content: &str, origin: &Path) -> Result<AppConfig, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", origin.display(), e)))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Sibling path the new contents are written to before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write to the staging sibling, then rename it over the config file
    async fn write_file(&self, content: &str) -> Result<(), ConfigError> {
        let write_error = |e: std::io::Error| ConfigError::WriteError(e.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        let staging = self.staging_path();
        fs::write(&staging, content).await.map_err(write_error)?;
        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(write_error(e));
        }
        Ok(())
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::empty()),
            Err(e) => return Err(ConfigError::ReadError(e.to_string())),
        };

        Self::parse_toml(&content, &self.path)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = Self::to_toml(config)?;
        self.write_file(&content).await
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let content = Self::to_toml(&AppConfig::defaults())?;
        self.write_file(&format!("{}{}", INIT_HEADER, content)).await
    }
}
