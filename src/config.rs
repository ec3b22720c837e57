use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::ExtractOptions;
use crate::ExportFormat;

/// Persisted defaults for commentharvest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Add the Author column
    pub include_author: bool,
    /// Add the Date column
    pub include_date: bool,
    /// Keep comments whose commented text is empty
    pub keep_empty: bool,
    /// Output format when none is given on the command line
    pub format: ExportFormat,
}

impl Config {
    /// Load config from the config directory, defaults if there is no file
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("commentharvest").join("config.toml"))
    }

    /// Write the default config file and return where it went
    pub fn init_default() -> Result<PathBuf> {
        let path = Self::get_config_path().context("No config directory on this platform")?;
        Config::default().save_to(&path)?;
        Ok(path)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            include_author: self.include_author,
            include_date: self.include_date,
            keep_empty: self.keep_empty,
        }
    }
}
