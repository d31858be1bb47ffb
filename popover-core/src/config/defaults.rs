//! Default configuration values for the popover core.
//!
//! These functions are used by `serde`'s `default` attribute in the configuration
//! structures to provide sensible default values when they are not specified in
//! the configuration file.

use crate::config::{LoggingConfig, PlacementConfig};
use std::path::PathBuf;

/// Inset applied to the display area on the sides of a popover that carry no arrow.
pub const POPOVER_MARGIN: f64 = 10.0;

/// Padding kept between a popover shown inside its anchor and the anchor's edges.
pub const INSIDE_ANCHOR_MARGIN: f64 = 10.0;

/// Overflow below this many device pixels is treated as rounding noise.
pub const OVERFLOW_EPSILON: f64 = 1.0;

/// Arrow base width used when the popover style does not specify one.
pub const DEFAULT_ARROW_WIDTH: f64 = 16.0;

/// Arrow height (its thickness between anchor and popover) used when the style does not specify one.
pub const DEFAULT_ARROW_HEIGHT: f64 = 8.0;

/// Corner radius used when the popover style does not specify one.
pub const DEFAULT_BORDER_RADIUS: f64 = 3.0;

/// Returns the default `LoggingConfig`.
///
/// Used by `CoreConfig` if the `logging` section is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`, no log file).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default `PlacementConfig`.
///
/// Used by `CoreConfig` if the `placement` section is missing.
pub(super) fn default_placement_config() -> PlacementConfig {
    PlacementConfig {
        popover_margin: default_popover_margin(),
        inside_anchor_margin: default_inside_anchor_margin(),
        overflow_epsilon: default_overflow_epsilon(),
        default_arrow_width: default_arrow_width(),
        default_arrow_height: default_arrow_height(),
        default_border_radius: default_border_radius(),
    }
}

pub(super) fn default_popover_margin() -> f64 {
    POPOVER_MARGIN
}

pub(super) fn default_inside_anchor_margin() -> f64 {
    INSIDE_ANCHOR_MARGIN
}

pub(super) fn default_overflow_epsilon() -> f64 {
    OVERFLOW_EPSILON
}

pub(super) fn default_arrow_width() -> f64 {
    DEFAULT_ARROW_WIDTH
}

pub(super) fn default_arrow_height() -> f64 {
    DEFAULT_ARROW_HEIGHT
}

pub(super) fn default_border_radius() -> f64 {
    DEFAULT_BORDER_RADIUS
}
