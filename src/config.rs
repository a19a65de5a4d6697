//! Configuration file handling
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [precision]
//! characters = 12
//!
//! [logging]
//! level = "info"
//! file = "geohashkit.log"
//!
//! [output]
//! progress = true
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use log::{debug, LevelFilter};

use crate::geohash::constants::precision::MAX_CHARACTER_PRECISION;
use crate::geohash::errors::{GeoHashError, GeoHashResult};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "geohashkit.toml";

/// Settings for the kit and the command line tool
#[derive(Debug, Clone, PartialEq)]
pub struct KitConfig {
    /// Base32 characters used when encoding without an explicit precision
    pub characters: u8,
    /// Maximum level of log records
    pub log_level: LevelFilter,
    /// Optional file receiving the log records
    pub log_file: Option<String>,
    /// Whether long enumerations show a progress bar
    pub progress: bool,
}

impl Default for KitConfig {
    fn default() -> Self {
        KitConfig {
            characters: MAX_CHARACTER_PRECISION,
            log_level: LevelFilter::Info,
            log_file: None,
            progress: true,
        }
    }
}

impl KitConfig {
    /// Load the configuration from `path`
    ///
    /// Without a path the default file in the working directory is used if
    /// it exists, otherwise the defaults are returned. An explicitly named
    /// file that cannot be read is an error.
    pub fn load(path: Option<&str>) -> GeoHashResult<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE,
            None => {
                debug!("No configuration file, using defaults");
                return Ok(KitConfig::default());
            }
        };

        debug!("Loading configuration from {}", path);
        let content = fs::read_to_string(path)?;
        KitConfig::from_str(&content)
    }

    /// Parse a configuration from TOML text
    pub fn from_str(content: &str) -> GeoHashResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| GeoHashError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = KitConfig::default();

        if let Some(value) = toml_value.get("precision").and_then(|t| t.get("characters")) {
            let characters = value
                .as_integer()
                .ok_or_else(|| GeoHashError::ConfigError("precision.characters must be an integer".to_string()))?;
            if !(1..=MAX_CHARACTER_PRECISION as i64).contains(&characters) {
                return Err(GeoHashError::ConfigError(format!(
                    "precision.characters must be between 1 and {}, got {}",
                    MAX_CHARACTER_PRECISION, characters
                )));
            }
            config.characters = characters as u8;
        }

        if let Some(logging) = toml_value.get("logging") {
            if let Some(value) = logging.get("level") {
                let level = value
                    .as_str()
                    .ok_or_else(|| GeoHashError::ConfigError("logging.level must be a string".to_string()))?;
                config.log_level = parse_level(level)?;
            }
            if let Some(value) = logging.get("file") {
                let file = value
                    .as_str()
                    .ok_or_else(|| GeoHashError::ConfigError("logging.file must be a string".to_string()))?;
                config.log_file = Some(file.to_string());
            }
        }

        if let Some(value) = toml_value.get("output").and_then(|t| t.get("progress")) {
            config.progress = value
                .as_bool()
                .ok_or_else(|| GeoHashError::ConfigError("output.progress must be a boolean".to_string()))?;
        }

        Ok(config)
    }
}

fn parse_level(level: &str) -> GeoHashResult<LevelFilter> {
    match level.to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(GeoHashError::ConfigError(format!("Unknown log level '{}'", other))),
    }
}
