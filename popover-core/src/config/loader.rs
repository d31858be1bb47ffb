//! Configuration Loading for the popover core.
//!
//! This module provides the [`ConfigLoader`] struct, which is responsible for
//! loading, parsing, and validating the [`CoreConfig`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use popover_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("Popover margin: {}", config.placement.popover_margin),
//!     Err(e) => {
//!         popover_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Configuration File Location
//!
//! `ConfigLoader::load()` reads the file named by the `POPOVER_CONFIG`
//! environment variable. If the variable is unset or the file does not exist,
//! the default configuration is used.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CoreConfig, LoggingConfig, PlacementConfig};
use crate::error::{ConfigError, CoreError};

/// Environment variable naming the configuration file read by [`ConfigLoader::load`].
pub const CONFIG_PATH_ENV: &str = "POPOVER_CONFIG";

/// `ConfigLoader` provides static methods to load and validate `CoreConfig`.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration named by `POPOVER_CONFIG`.
    ///
    /// Falls back to [`CoreConfig::default`] when the variable is unset or the
    /// file does not exist.
    pub fn load() -> Result<CoreConfig, CoreError> {
        match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from_path(PathBuf::from(path)),
            None => {
                tracing::debug!("{} is not set, using default configuration", CONFIG_PATH_ENV);
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
        }
    }

    /// Loads and validates the configuration stored at `path`.
    ///
    /// A missing or empty file yields the default configuration. Other read
    /// failures map to [`ConfigError::ReadError`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<CoreConfig, CoreError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::load_from_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Configuration file {:?} not found, using defaults", path);
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
            Err(e) => Err(CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })),
        }
    }

    /// Parses and validates a TOML document.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Validates the loaded `CoreConfig`, normalizing string values in place.
    ///
    /// - Log level must be one of "trace", "debug", "info", "warn", "error".
    /// - Log format must be "text" or "json".
    /// - Margins, epsilon and border radius must be finite and non-negative.
    /// - Default arrow dimensions must be finite and positive.
    pub fn validate_config(config: &mut CoreConfig) -> Result<(), ConfigError> {
        Self::validate_logging_config(&mut config.logging)?;
        Self::validate_placement_config(&config.placement)?;
        Ok(())
    }

    fn validate_logging_config(logging: &mut LoggingConfig) -> Result<(), ConfigError> {
        let level_lower = logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {
                logging.level = level_lower;
            }
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    logging.level
                )));
            }
        }

        let format_lower = logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => {
                logging.format = format_lower;
            }
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    logging.format
                )));
            }
        }
        Ok(())
    }

    fn validate_placement_config(placement: &PlacementConfig) -> Result<(), ConfigError> {
        let non_negative = [
            ("popover_margin", placement.popover_margin),
            ("inside_anchor_margin", placement.inside_anchor_margin),
            ("overflow_epsilon", placement.overflow_epsilon),
            ("default_border_radius", placement.default_border_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "placement.{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        let positive = [
            ("default_arrow_width", placement.default_arrow_width),
            ("default_arrow_height", placement.default_arrow_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "placement.{} must be a finite, positive number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
