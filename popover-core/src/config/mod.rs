//! Configuration Management for the popover core.
//!
//! This module defines how the engine's tunable constants and the logging
//! setup are structured, loaded and validated.
//!
//! ## Key Components
//!
//! - [`types`]: [`CoreConfig`], [`LoggingConfig`] and [`PlacementConfig`].
//! - [`defaults`]: Default values, including the placement constants
//!   ([`POPOVER_MARGIN`], [`OVERFLOW_EPSILON`], ...).
//! - [`loader`]: [`ConfigLoader`], which reads TOML from a file or string and
//!   validates the result.
//!
//! ## Loading Process
//!
//! 1. `ConfigLoader::load()` resolves the file named by `POPOVER_CONFIG`.
//! 2. A missing file or empty document yields [`CoreConfig::default`].
//! 3. Otherwise the TOML is parsed. Unknown keys are rejected.
//! 4. The result is validated: log level and format are normalized to
//!    lowercase, margins must be non-negative and arrow sizes positive.

pub mod defaults;
pub mod loader;
pub mod types;

pub use defaults::{
    DEFAULT_ARROW_HEIGHT, DEFAULT_ARROW_WIDTH, DEFAULT_BORDER_RADIUS, INSIDE_ANCHOR_MARGIN,
    OVERFLOW_EPSILON, POPOVER_MARGIN,
};
pub use loader::{ConfigLoader, CONFIG_PATH_ENV};
pub use types::{CoreConfig, LoggingConfig, PlacementConfig};
