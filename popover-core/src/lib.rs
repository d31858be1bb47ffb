//! # Popover Core (`popover-core`)
//!
//! Foundation for the popover placement engine in `popover-geometry`.
//!
//! - **Geometry value types**: [`Point`], [`Size`] and [`Rect`], compared with
//!   whole-pixel rounding so sub-pixel jitter never counts as a change.
//! - **Placement types**: [`Placement`], [`Side`] and [`PlacementRequest`].
//! - **Error handling**: [`CoreError`] with [`ConfigError`] and [`LoggingError`].
//! - **Configuration**: [`ConfigLoader`] reads a TOML [`CoreConfig`] holding
//!   the logging setup and the engine's [`PlacementConfig`] constants.
//! - **Logging**: `tracing` subscribers with console and file output.
//!
//! ```rust,ignore
//! use popover_core::config::ConfigLoader;
//! use popover_core::logging::init_logging;
//! use popover_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     tracing::info!("Popover core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, PlacementConfig};
pub use error::{ConfigError, CoreError, LoggingError, PlacementParseError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Placement, PlacementRequest, Point, Rect, Side, Size};
