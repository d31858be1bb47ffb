//! Free space around the anchor and the ranking of candidate sides.
//!
//! The list is built once per computation and shared by explicit list
//! resolution and the auto-selector. Both rank through
//! [`calculate_best_placements`].

use popover_core::types::{Rect, Side, Size};
use tracing::trace;

/// Room for the popover on one side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceEntry {
    pub side: Side,
    /// Contiguous space along the arrow axis, after margin and arrow.
    pub size_available: f64,
    pub fits: bool,
    /// `size_available` minus the requested extent. Negative when it does not fit.
    pub extra_space: f64,
}

/// One [`SpaceEntry`] per side, in [`Side::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceList {
    entries: [SpaceEntry; 4],
}

impl SpaceList {
    /// Measures the space on each side of `anchor` inside `display_area`.
    ///
    /// `arrow_thickness` is the arrow height plus any caller offset; `margin`
    /// is the inset kept from the display-area edge.
    pub fn compute(
        anchor: &Rect,
        display_area: &Rect,
        requested: &Size,
        arrow_thickness: f64,
        margin: f64,
    ) -> Self {
        let entries = Side::ALL.map(|side| {
            let (size_available, requested_extent) = match side {
                Side::Left => (anchor.left() - display_area.left(), requested.width),
                Side::Right => (display_area.right() - anchor.right(), requested.width),
                Side::Top => (anchor.top() - display_area.top(), requested.height),
                Side::Bottom => (display_area.bottom() - anchor.bottom(), requested.height),
            };
            let size_available = size_available - margin - arrow_thickness;
            SpaceEntry {
                side,
                size_available,
                fits: size_available >= requested_extent,
                extra_space: size_available - requested_extent,
            }
        });
        trace!(?entries, "Computed space list");
        SpaceList { entries }
    }

    pub fn entry(&self, side: Side) -> &SpaceEntry {
        match side {
            Side::Left => &self.entries[0],
            Side::Right => &self.entries[1],
            Side::Top => &self.entries[2],
            Side::Bottom => &self.entries[3],
        }
    }

    /// Fitting sides, most extra space first.
    pub fn best_placements(&self) -> Vec<Side> {
        calculate_best_placements(&self.entries)
    }
}

/// Filters `entries` to those that fit and sorts them by descending extra space.
///
/// The sort is stable, so ties keep the order of `entries`.
pub fn calculate_best_placements(entries: &[SpaceEntry]) -> Vec<Side> {
    let mut fitting: Vec<&SpaceEntry> = entries.iter().filter(|entry| entry.fits).collect();
    fitting.sort_by(|a, b| b.extra_space.total_cmp(&a.extra_space));
    fitting.into_iter().map(|entry| entry.side).collect()
}
