//! Data directory layout (native only)
//!
//! Directory structure:
//! ~/.goldenmile/
//!   config.yaml          # Server, cities, metro toggle, timeouts
//!   keybindings.yaml     # Optional key overrides
//!   goldenmile.log       # Rotating log file
//!   reports/             # Downloaded PDF reports

use std::fs;
use std::path::{Path, PathBuf};

use super::config_data::{AppConfig, ConfigError};
use super::keybindings_data::KeybindingsConfig;
use crate::util::files::atomic_write_bytes;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    Invalid(ConfigError),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::Invalid(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<ConfigError> for StorageError {
    fn from(e: ConfigError) -> Self {
        StorageError::Invalid(e)
    }
}

pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.goldenmile/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".goldenmile")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load `config.yaml`, or the defaults when it does not exist.
    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Write `config.yaml`. Invalid configurations are refused.
    pub fn save_config(&self, config: &AppConfig) -> Result<(), StorageError> {
        config.validate()?;
        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        atomic_write_bytes(&self.config_path(), yaml.as_bytes())
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Load the configuration, writing a default `config.yaml` on first run
    /// so there is a file to edit.
    pub fn load_or_init_config(&self) -> Result<AppConfig, StorageError> {
        self.init()?;

        if !self.config_path().exists() {
            let config = AppConfig::default();
            self.save_config(&config)?;
            tracing::info!(path = %self.config_path().display(), "Wrote default config");
            return Ok(config);
        }

        self.load_config()
    }

    pub fn load_keybindings(&self) -> KeybindingsConfig {
        KeybindingsConfig::load_or_default(&self.root)
    }

    /// Reports directory for `config`, created if missing.
    pub fn reports_dir(&self, config: &AppConfig) -> Result<PathBuf, StorageError> {
        let dir = config.reports_dir(&self.root);
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::Io(format!("Failed to create reports directory: {}", e)))?;
        Ok(dir)
    }
}
