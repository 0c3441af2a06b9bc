//! Application settings loading from config.toml
//!
//! This module provides functionality to load tracker settings from a TOML
//! configuration file, with sensible defaults when the file is absent and
//! environment-variable overrides for deployment.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Database connection string
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Shared access code that gates the tracker
    #[serde(default = "default_access_code")]
    pub access_code: String,
    /// Directory for local artifacts (auth flag, CSV exports)
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_database_url() -> String {
    "sqlite://data/stay_tracker.sqlite?mode=rwc".to_string()
}

fn default_access_code() -> String {
    "999".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            access_code: default_access_code(),
            data_dir: default_data_dir(),
        }
    }
}

impl Settings {
    /// Applies environment-variable overrides on top of file/default values.
    ///
    /// `DATABASE_URL` overrides the connection string and
    /// `TRACKER_ACCESS_CODE` overrides the shared access code.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database_url = url;
        }
        if let Ok(code) = std::env::var("TRACKER_ACCESS_CODE") {
            self.access_code = code;
        }
    }
}

/// Loads settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Returns
/// * `Ok(Settings)` - Successfully parsed configuration
/// * `Err(Error)` - Failed to read or parse the configuration file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let mut settings: Settings = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.apply_env_overrides();
    Ok(settings)
}

/// Loads settings from the default location (./config.toml).
///
/// A missing file is not an error: defaults plus environment overrides are
/// returned instead, so a bare checkout runs without any configuration.
pub fn load_default_config() -> Result<Settings> {
    if Path::new("config.toml").exists() {
        load_config("config.toml")
    } else {
        let mut settings = Settings::default();
        settings.apply_env_overrides();
        Ok(settings)
    }
}
