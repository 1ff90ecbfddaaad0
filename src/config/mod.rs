//! Configuration management module.
//!
//! Handles loading and saving application configuration from JSON file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::formats::{CopyFormat, PasteFormat};

const CONFIG_FILE_NAME: &str = "clip_transform_config.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_encoding")]
    pub encoding: String,
    #[serde(default)]
    pub copy_format: CopyFormat,
    #[serde(default)]
    pub paste_format: PasteFormat,
    #[serde(default = "default_true")]
    pub warn_on_scratchpad: bool,
    /// Also put pasted output on the clipboard.
    #[serde(default)]
    pub auto_copy_output: bool,
}

fn default_true() -> bool {
    true
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            copy_format: CopyFormat::default(),
            paste_format: PasteFormat::default(),
            warn_on_scratchpad: true,
            auto_copy_output: false,
        }
    }
}

/// Configuration manager for loading/saving config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        let config_path = Self::get_exe_directory().join(CONFIG_FILE_NAME);
        Self { config_path }
    }

    /// Manager for a config file at an explicit path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the config file path.
    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from file, falling back to defaults.
    pub fn load(&self) -> Config {
        let mut config = match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Config::default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable config: {:#}", e);
                Config::default()
            }
        };

        if config.encoding.trim().is_empty() {
            config.encoding = default_encoding();
        }

        config
    }

    fn try_load(&self) -> anyhow::Result<Option<Config>> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("reading {}", self.config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.config_path.display()))?;

        Ok(Some(config))
    }

    /// Save configuration to file.
    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(config).context("serializing config")?;
        fs::write(&self.config_path, json)
            .with_context(|| format!("writing {}", self.config_path.display()))?;
        tracing::info!(path = %self.config_path.display(), "Saved config");
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
