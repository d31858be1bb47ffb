//! Core data types shared between the placement engine and its callers.
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`], with rounding-tolerant equality.
//! - **Placement**: [`Placement`], [`Side`] and [`PlacementRequest`].
//!
//! All types are serializable and deserializable using Serde.

pub mod geometry;
pub mod placement;

pub use geometry::{px_eq, round_px, Point, Rect, Size};
pub use placement::{Placement, PlacementRequest, Side};
