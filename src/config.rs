//! Configuration management
//!
//! Default compile options can be stored in `~/.repath/config.toml`:
//!
//! ```toml
//! [options]
//! sensitive = false
//! strict = true
//! end = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::Options;
use crate::error::{Error, Result};

/// Global config directory name
const CONFIG_DIR: &str = ".repath";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// repath configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default compile options
    #[serde(default)]
    pub options: Options,
}

impl Config {
    /// Get the config file path
    ///
    /// Returns `~/.repath/config.toml`.
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load the default config file, or defaults if there is none
    ///
    /// A malformed default file is logged and ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|err| {
            log::warn!("ignoring {err}");
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&content).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
