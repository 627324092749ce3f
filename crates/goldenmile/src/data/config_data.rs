//! Application configuration stored in `config.yaml`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use goldenmile_core::FormConfig;
use goldenmile_core::config::DEFAULT_CITIES;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Everything in `config.yaml`. All fields are optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the advisory backend
    pub server_url: String,
    pub cities: Vec<String>,
    /// Whether the form offers the metro Yes/No toggle
    pub metro_toggle: bool,
    /// Per-request timeout in seconds, 0 waits forever
    pub request_timeout_secs: u64,
    /// Where downloaded reports go (default: `<data_dir>/reports`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            metro_toggle: true,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            reports_dir: None,
        }
    }
}

/// A configuration value the app cannot work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoCities,
    BlankCity,
    DuplicateCity(String),
    InvalidServerUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoCities => write!(f, "at least one city must be configured"),
            ConfigError::BlankCity => write!(f, "city names must not be blank"),
            ConfigError::DuplicateCity(name) => write!(f, "city '{}' is listed twice", name),
            ConfigError::InvalidServerUrl(url) => {
                write!(f, "server_url '{}' must start with http:// or https://", url)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.server_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl(self.server_url.clone()));
        }

        if self.cities.is_empty() {
            return Err(ConfigError::NoCities);
        }
        for (i, city) in self.cities.iter().enumerate() {
            if city.trim().is_empty() {
                return Err(ConfigError::BlankCity);
            }
            if self.cities[..i]
                .iter()
                .any(|other| other.trim().eq_ignore_ascii_case(city.trim()))
            {
                return Err(ConfigError::DuplicateCity(city.trim().to_string()));
            }
        }
        Ok(())
    }

    /// The form's field set derived from this configuration.
    pub fn form_config(&self) -> FormConfig {
        let cities = self.cities.iter().map(|c| c.trim().to_string()).collect();
        FormConfig::new(cities).with_metro_toggle(self.metro_toggle)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Resolve the reports directory. Relative paths are taken from `data_dir`.
    pub fn reports_dir(&self, data_dir: &Path) -> PathBuf {
        match &self.reports_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => data_dir.join(dir),
            None => data_dir.join("reports"),
        }
    }
}
