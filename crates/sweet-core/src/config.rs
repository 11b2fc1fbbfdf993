//! Configuration management for the Sweet Shop client.
//!
//! Loads configuration from ${SWEETSHOP_HOME}/config.toml with sensible
//! defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config template with comments, embedded at compile time.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

pub mod paths {
    //! Path resolution for the client's configuration and data files.
    //!
    //! SWEETSHOP_HOME resolution order:
    //! 1. SWEETSHOP_HOME environment variable (if set)
    //! 2. ~/.config/sweetshop (default)

    use std::path::PathBuf;

    /// Returns the Sweet Shop home directory.
    ///
    /// Checks SWEETSHOP_HOME env var first, falls back to ~/.config/sweetshop
    pub fn shop_home() -> PathBuf {
        if let Ok(home) = std::env::var("SWEETSHOP_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("sweetshop"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        shop_home().join("config.toml")
    }

    /// Returns the path to the persisted credentials file.
    pub fn credentials_path() -> PathBuf {
        shop_home().join("credentials.json")
    }

    /// Returns the directory where log files are written.
    pub fn logs_dir() -> PathBuf {
        shop_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the shop API
    pub api_base_url: String,

    /// Timeout for API requests in seconds (0 disables)
    pub request_timeout_secs: u32,
}

impl Config {
    const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 30;

    /// Loads configuration from the default config path.
    ///
    /// The SWEETSHOP_BASE_URL environment variable, if set, overrides the
    /// configured API base URL.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        if let Ok(url) = std::env::var("SWEETSHOP_BASE_URL") {
            config.api_base_url = url;
        }
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to the given path if missing.
    pub fn write_template_if_missing(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Returns the request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
