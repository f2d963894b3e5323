//! Configuration module for the sqlidt CLI.
//!
//! This module handles locating and loading `sqlidt.toml`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use sqlident_lex::grammar::DEFAULT_ESCAPE;
use std::path::{Path, PathBuf};

use crate::commands::common::{GrammarChoice, OutputFormat};
use crate::error::{Result, SqlidtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "sqlidt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Grammar used by `check` when `--grammar` is not given.
    #[serde(default)]
    pub grammar: GrammarChoice,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Quote-specific configuration.
    #[serde(default)]
    pub quote: QuoteConfig,
}

/// Output configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// How results are printed.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Quote-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteConfig {
    /// Escape character for Unicode-escaped quoting.
    #[serde(default = "default_escape")]
    pub escape: char,
}

fn default_escape() -> char {
    DEFAULT_ESCAPE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            grammar: GrammarChoice::default(),
            output: OutputConfig::default(),
            quote: QuoteConfig::default(),
        }
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            escape: default_escape(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/sqlidt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SqlidtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            SqlidtError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("sqlidt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("sqlidt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
