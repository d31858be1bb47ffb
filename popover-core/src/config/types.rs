//! Configuration Data Structures for the popover core.
//!
//! These structs are populated by deserializing a TOML file. Fields missing
//! from the file take their values from [`super::defaults`], and unknown fields
//! are rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use crate::types::Size;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how the placement engine's `tracing` events are written.
///
/// ```
/// use popover_core::config::LoggingConfig;
///
/// let log_config: LoggingConfig = toml::from_str("format = \"json\"").unwrap();
/// assert_eq!(log_config.format, "json");
/// assert_eq!(log_config.level, "info");
/// assert!(log_config.file_path.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error", in any case.
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Base path of the daily rolled log file. `None` logs to stdout only.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Tuning constants for the placement engine.
///
/// All lengths are in device pixels.
///
/// ```
/// use popover_core::config::PlacementConfig;
///
/// let config: PlacementConfig = toml::from_str("popover_margin = 4.0").unwrap();
/// assert_eq!(config.popover_margin, 4.0);
/// assert_eq!(config.default_border_radius, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementConfig {
    /// Inset applied to the display area on every side of the popover that does not carry the arrow.
    #[serde(default = "defaults::default_popover_margin")]
    pub popover_margin: f64,
    /// Padding between a popover drawn inside its anchor and the anchor's edges.
    #[serde(default = "defaults::default_inside_anchor_margin")]
    pub inside_anchor_margin: f64,
    /// Overflow tolerance. A popover overflowing by this much or less still fits.
    #[serde(default = "defaults::default_overflow_epsilon")]
    pub overflow_epsilon: f64,
    #[serde(default = "defaults::default_arrow_width")]
    pub default_arrow_width: f64,
    #[serde(default = "defaults::default_arrow_height")]
    pub default_arrow_height: f64,
    #[serde(default = "defaults::default_border_radius")]
    pub default_border_radius: f64,
}

impl PlacementConfig {
    /// The arrow size used when the popover style provides none.
    pub fn default_arrow_size(&self) -> Size {
        Size::new(self.default_arrow_width, self.default_arrow_height)
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        defaults::default_placement_config()
    }
}

/// Root configuration structure.
///
/// ```
/// use popover_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [placement]
/// popover_margin = 12.0
/// "#;
/// let loaded_config: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded_config.logging.level, "warn");
/// assert_eq!(loaded_config.placement.popover_margin, 12.0);
/// assert_eq!(loaded_config.placement.overflow_epsilon, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Configuration for the logging subsystem.
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    /// Tuning for the placement engine.
    #[serde(default = "defaults::default_placement_config")]
    pub placement: PlacementConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            placement: defaults::default_placement_config(),
        }
    }
}
