//! # Popover Geometry (`popover-geometry`)
//!
//! Positions a popover next to an anchor rectangle so that it stays inside a
//! display area.
//!
//! The entry point is [`compute_geometry`], a pure function from a
//! [`GeometryRequest`] to a [`Geometry`]. It picks a side of the anchor
//! (or honors the requested one), shrinks the content when space runs out,
//! and falls back to placing the popover inside a large anchor or centering
//! it when no side works.
//!
//! Around the engine sit the helpers a view layer needs:
//!
//! - [`change`]: rounding-tolerant change detection.
//! - [`PlacementTracker`]: keeps the active geometry, applies placement
//!   hysteresis and classifies each update.
//! - [`style`]: reads arrow and corner sizes through an injected accessor.
//! - [`ModalGate`]: the process-wide "one modal at a time" record.
//!
//! ```
//! use popover_core::types::{Placement, Point, Rect, Size};
//! use popover_geometry::{compute_geometry, GeometryRequest};
//!
//! let request = GeometryRequest::new(Size::new(200.0, 200.0), Rect::new(0.0, 0.0, 400.0, 400.0))
//!     .with_anchor(Rect::new(190.0, -100.0, 20.0, 20.0));
//! let geometry = compute_geometry(&request);
//! assert_eq!(geometry.placement, Placement::Bottom);
//! assert_eq!(geometry.popover_origin, Point::new(100.0, 8.0));
//! ```

pub mod change;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod modal;
pub mod request;
pub mod solvers;
pub mod space;
pub mod style;
pub mod tracker;

pub use change::{content_size_changed, geometry_changed, important_input_changed};
pub use engine::{compute_geometry, compute_geometry_with, sanitize_anchor};
pub use error::GeometryError;
pub use geometry::{Geometry, ViewOverflow};
pub use modal::{global_modal_gate, ModalGate};
pub use request::{GeometryRequest, PopoverShift};
pub use space::{calculate_best_placements, SpaceEntry, SpaceList};
pub use style::{resolve_style, ResolvedStyle, StyleHints, StyleSource};
pub use tracker::{GeometryUpdate, PlacementTracker};
