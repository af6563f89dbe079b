use crate::core::{DeskError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure parsed from a TOML file.
///
/// Every section is optional; a missing file yields the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub repair_request: RepairRequestConfig,
}

/// Defaults used by the raise-repair-request command for the repair row it
/// creates: the request is raised before any maintenance company has been
/// engaged, so the row carries a placeholder company and date until the
/// repair is actually scheduled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RepairRequestConfig {
    pub company_id: i64,
    pub repair_date: String,
}

impl Default for RepairRequestConfig {
    fn default() -> Self {
        RepairRequestConfig {
            company_id: 0,
            repair_date: "2000-01-01".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location if a file is present
    /// there, otherwise returns the built-in defaults.
    pub fn load() -> Result<Config> {
        match default_config_path() {
            Some(path) if path.exists() => load_config(path),
            _ => Ok(Config::default()),
        }
    }
}

/// Default configuration file location: `<config-dir>/hoteldesk/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hoteldesk").join("config.toml"))
}

/// Loads configuration from a TOML file at the given path.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(&path).map_err(|e| {
        DeskError::Config(format!(
            "failed to read {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    toml::from_str(&content).map_err(|e| DeskError::Config(e.to_string()))
}
