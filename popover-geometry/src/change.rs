//! Change detection between consecutive requests and results.
//!
//! Geometry and measurements compare with whole-pixel rounding, so layout
//! noise below half a pixel never triggers a recomputation or an animation.

use crate::geometry::Geometry;
use crate::request::GeometryRequest;
use popover_core::types::px_eq;

/// Returns `true` when `next` should replace the active geometry.
pub fn geometry_changed(active: Option<&Geometry>, next: &Geometry) -> bool {
    active.map_or(true, |active| active != next)
}

/// Returns `true` when an input that affects placement changed: the anchor,
/// the display area, the placement request, the shifts, the offset or the
/// arrow and corner styling.
///
/// The requested content size is not included; see [`content_size_changed`].
pub fn important_input_changed(previous: &GeometryRequest, next: &GeometryRequest) -> bool {
    previous.anchor != next.anchor
        || previous.display_area != next.display_area
        || previous.placement != next.placement
        || previous.arrow_shift != next.arrow_shift
        || previous.popover_shift != next.popover_shift
        || !px_eq(previous.offset, next.offset)
        || previous.arrow_size != next.arrow_size
        || previous.border_radius.map(f64::round) != next.border_radius.map(f64::round)
        || previous.style != next.style
}

/// Returns `true` when the measured content size changed by at least a pixel.
pub fn content_size_changed(previous: &GeometryRequest, next: &GeometryRequest) -> bool {
    previous.requested_content_size != next.requested_content_size
}
