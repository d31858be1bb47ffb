//! The engine's output.

use popover_core::types::{Placement, Point, Size};
use serde::{Deserialize, Serialize};

/// Per-axis flags set when the requested content did not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewOverflow {
    pub width: bool,
    pub height: bool,
}

impl ViewOverflow {
    pub fn any(&self) -> bool {
        self.width || self.height
    }
}

/// Where and how large a popover is drawn.
///
/// Equality compares every field with the whole-pixel rounding of the value
/// types, so it can be used directly to suppress redundant animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Top-left corner of the popover content.
    pub popover_origin: Point,
    /// The point on the anchor the arrow touches.
    pub anchor_point: Point,
    /// The resolved placement. Never `Auto`.
    pub placement: Placement,
    /// Upper bound for the content size under this geometry.
    pub forced_content_size: Size,
    pub view_larger_than_display_area: ViewOverflow,
}

impl Geometry {
    /// The size the content actually occupies: the requested size, replaced by
    /// the forced size on every axis that overflowed.
    pub fn view_size(&self, requested: &Size) -> Size {
        Size::new(
            if self.view_larger_than_display_area.width {
                self.forced_content_size.width
            } else {
                requested.width
            },
            if self.view_larger_than_display_area.height {
                self.forced_content_size.height
            } else {
                requested.height
            },
        )
    }
}
