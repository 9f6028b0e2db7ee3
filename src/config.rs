//! Configuration file handling.
//!
//! A small TOML file under the user config directory holds the defaults the
//! CLI falls back to when flags are omitted. Every field has a default and
//! a missing file just means "all defaults", so a fresh install works
//! without any setup.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Format id used when `generate` gets no `--format`.
    pub default_format: String,
    /// Gradient start color (hex).
    pub gradient_start: String,
    /// Gradient end color (hex).
    pub gradient_end: String,
    /// FIGlet font used by the banner format.
    pub banner_font: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: "ansi".to_string(),
            gradient_start: "#ff0000".to_string(),
            gradient_end: "#0000ff".to_string(),
            banner_font: "standard".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file (`<config dir>/termstyle/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine config directory")?;
        Ok(base.join("termstyle").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config file")
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }

    /// Write the config to its standard location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
