//! Configuration for minised
//!
//! Optional settings live in ~/.minised/config.toml (or the file passed with
//! `--config`). A missing file means defaults; the file is never created.
//! The per-run target and command list form a separate immutable
//! [`EditConfig`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::{EditOptions, EmptyPatternPolicy};

/// Default mode for files created by a write
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// minised configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Edit engine settings
    #[serde(default)]
    pub edit: EditSettings,

    /// Output file settings
    #[serde(default)]
    pub write: WriteConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also log to ~/.minised/minised.log
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditSettings {
    /// "reject" or "ignore"
    #[serde(default)]
    pub empty_pattern: EmptyPatternPolicy,
}

impl EditSettings {
    pub fn options(&self) -> EditOptions {
        EditOptions {
            empty_pattern: self.empty_pattern,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteConfig {
    /// Permission bits for a file that does not exist at write time
    #[serde(default = "default_file_mode")]
    pub file_mode: u32,

    /// Write through a temp file and rename
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            file_mode: DEFAULT_FILE_MODE,
            atomic: true,
        }
    }
}

fn default_file_mode() -> u32 { DEFAULT_FILE_MODE }
fn default_atomic() -> bool { true }

/// The file to edit and the ordered edit commands, fixed for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConfig {
    path: PathBuf,
    commands: Vec<String>,
}

impl EditConfig {
    pub fn new(path: PathBuf, commands: Vec<String>) -> Self {
        Self { path, commands }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

/// Get the minised home directory (~/.minised)
pub fn config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home_dir.join(".minised"))
}

/// Get the default configuration file path
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from `path`, or the default location when `None`
///
/// An explicit path must exist. The default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_file_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config = parse_config(&config_str)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

    Ok(config)
}

/// Parse and validate configuration text
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text).context("Failed to parse config")?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.write.file_mode > 0o777 {
        anyhow::bail!(
            "Invalid file_mode: {:o} (must be at most 777 octal)",
            config.write.file_mode
        );
    }

    Ok(())
}
