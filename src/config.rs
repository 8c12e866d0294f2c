//! Configuration for the command-line host
//!
//! The library itself keeps no preferences; the CLI reads the user's
//! preferred format and logging setup from a small TOML file and passes
//! them to the library on every call.

use std::fs;
use std::path::Path;

use log::{debug, LevelFilter};

use crate::errors::{CoordError, CoordResult};
use crate::format::{FormatKind, FormatOptions};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "coordkit.toml";

/// Settings loaded from `coordkit.toml`
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Preferred output format
    pub format: FormatKind,
    /// Preferred formatting options
    pub options: FormatOptions,
    /// Maximum level written to the log
    pub log_level: LevelFilter,
    /// Log file; console-only logging when absent
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            format: FormatKind::DD,
            options: FormatOptions::default(),
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    ///
    /// Missing keys keep their defaults; present keys with the wrong type
    /// or an unknown value are errors.
    pub fn from_toml_str(content: &str) -> CoordResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CoordError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = AppConfig::default();

        if let Some(table) = toml_value.get("format").and_then(|v| v.as_table()) {
            if let Some(kind) = table.get("kind") {
                let name = kind.as_str()
                    .ok_or_else(|| CoordError::ConfigError("format.kind must be a string".to_string()))?;
                config.format = name.parse()
                    .map_err(|_| CoordError::ConfigError(format!("Unknown format.kind: {}", name)))?;
            }

            if let Some(compact) = table.get("compact") {
                config.options.compact = compact.as_bool()
                    .ok_or_else(|| CoordError::ConfigError("format.compact must be a boolean".to_string()))?;
            }

            if let Some(precision) = table.get("precision") {
                let value = precision.as_integer()
                    .filter(|p| (0..=u8::MAX as i64).contains(p))
                    .ok_or_else(|| CoordError::ConfigError("format.precision must be a small non-negative integer".to_string()))?;
                config.options.precision = Some(value as u8);
            }
        }

        if let Some(table) = toml_value.get("logging").and_then(|v| v.as_table()) {
            if let Some(level) = table.get("level") {
                let name = level.as_str()
                    .ok_or_else(|| CoordError::ConfigError("logging.level must be a string".to_string()))?;
                config.log_level = name.parse()
                    .map_err(|_| CoordError::ConfigError(format!("Unknown logging.level: {}", name)))?;
            }

            if let Some(file) = table.get("file") {
                let path = file.as_str()
                    .ok_or_else(|| CoordError::ConfigError("logging.file must be a string".to_string()))?;
                config.log_file = Some(path.to_string());
            }
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> CoordResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(CoordError::IoError(e)),
        };

        Self::from_toml_str(&contents)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &str) -> CoordResult<Self> {
        if Path::new(path).exists() {
            debug!("Loading configuration from {}", path);
            Self::from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path);
            Ok(AppConfig::default())
        }
    }
}
