//! Configuration handling for schema_split

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete schema_split configuration
///
/// Every field has a default that reproduces a plain, zero-argument run, so
/// a config file is never required.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

/// Output generation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Root directory the sql/ tree is written under
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Log what would be written without touching the filesystem
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            dry_run: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}
