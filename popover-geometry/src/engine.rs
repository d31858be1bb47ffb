//! The placement engine.
//!
//! [`compute_geometry`] is a pure function of its request: it sanitizes the
//! anchor, measures the space around it once, resolves the requested
//! placement to a side (or to floating), runs the directional solver for that
//! side and finally falls back to placing the popover inside a large anchor or
//! centering it in the display area.

use crate::geometry::{Geometry, ViewOverflow};
use crate::request::GeometryRequest;
use crate::solvers::{main_axis_overflow, solve, SolverInput};
use crate::space::SpaceList;
use crate::style::resolve_style;
use once_cell::sync::Lazy;
use popover_core::config::PlacementConfig;
use popover_core::types::{Placement, PlacementRequest, Point, Rect, Side, Size};
use tracing::{debug, trace};

static DEFAULT_PLACEMENT_CONFIG: Lazy<PlacementConfig> = Lazy::new(PlacementConfig::default);

/// Outcome of matching the placement request against the ranked sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Side(Side),
    Auto,
    Floating,
    /// A placement list in which nothing fits.
    Unplaced,
}

/// Computes the popover geometry with the default [`PlacementConfig`].
///
/// ```
/// use popover_core::types::{Placement, Point, Rect, Size};
/// use popover_geometry::{compute_geometry, GeometryRequest};
///
/// let request = GeometryRequest::new(Size::new(200.0, 200.0), Rect::new(0.0, 0.0, 400.0, 400.0));
/// let geometry = compute_geometry(&request);
/// assert_eq!(geometry.placement, Placement::Floating);
/// assert_eq!(geometry.popover_origin, Point::new(100.0, 100.0));
/// ```
pub fn compute_geometry(request: &GeometryRequest) -> Geometry {
    compute_geometry_with(request, &DEFAULT_PLACEMENT_CONFIG)
}

/// Computes the popover geometry with explicit engine tuning.
pub fn compute_geometry_with(request: &GeometryRequest, config: &PlacementConfig) -> Geometry {
    let display_area = request.display_area;
    let requested = request.requested_content_size;

    let Some(raw_anchor) = request.anchor else {
        debug!("No anchor, floating the popover");
        return floating(request, config);
    };
    let anchor = sanitize_anchor(&raw_anchor, &display_area);

    let style = resolve_style(&request.style, config);
    let arrow_size = request.arrow_size.unwrap_or(style.arrow_size);
    let border_radius = request.border_radius.unwrap_or(style.border_radius);
    let offset = finite_or_zero(request.offset);
    let input = SolverInput {
        anchor: &anchor,
        display_area: &display_area,
        requested,
        arrow_size,
        border_radius,
        arrow_shift: clamp_unit(request.arrow_shift),
        offset,
        config,
    };

    let space = SpaceList::compute(
        &anchor,
        &display_area,
        &requested,
        arrow_size.height + offset,
        config.popover_margin,
    );
    let ranked = space.best_placements();
    let resolution = resolve_placement(&request.placement, &ranked);
    debug!(?resolution, ?ranked, "Resolved placement request {:?}", request.placement);

    let directional = match resolution {
        Resolution::Floating => return floating(request, config),
        Resolution::Side(side) => Some(solve(side, &input)),
        Resolution::Auto => auto_select(request.previous_placement, &ranked, &input),
        Resolution::Unplaced => None,
    };

    match directional {
        Some(geometry) if !geometry.view_larger_than_display_area.any() => geometry,
        Some(geometry) => match inside_anchor(&anchor, &display_area, &requested, config) {
            Some(inside) => inside,
            None if resolution == Resolution::Auto => floating(request, config),
            None => {
                debug!(placement = %geometry.placement, "Keeping overflowing explicit placement");
                geometry
            }
        },
        None => inside_anchor(&anchor, &display_area, &requested, config)
            .unwrap_or_else(|| floating(request, config)),
    }
}

/// Pins an anchor that leaves `display_area` to the nearest edge.
///
/// An anchor starting past the far edge moves onto that edge. An anchor
/// starting before the near edge, even partly, moves so that its far side
/// touches it. Anchors starting inside the display area are returned unchanged.
pub fn sanitize_anchor(anchor: &Rect, display_area: &Rect) -> Rect {
    let mut sanitized = *anchor;
    if sanitized.x > display_area.right() {
        sanitized.x = display_area.right();
    } else if sanitized.x < display_area.left() {
        sanitized.x = display_area.left() - sanitized.width;
    }
    if sanitized.y > display_area.bottom() {
        sanitized.y = display_area.bottom();
    } else if sanitized.y < display_area.top() {
        sanitized.y = display_area.top() - sanitized.height;
    }
    if sanitized != *anchor {
        debug!(?anchor, ?sanitized, "Anchor outside display area, pinned to edge");
    }
    sanitized
}

fn resolve_placement(request: &PlacementRequest, ranked: &[Side]) -> Resolution {
    match request {
        PlacementRequest::Single(placement) => match placement.side() {
            Some(side) => Resolution::Side(side),
            None if *placement == Placement::Floating => Resolution::Floating,
            None => Resolution::Auto,
        },
        PlacementRequest::List(placements) if placements.is_empty() => Resolution::Auto,
        PlacementRequest::List(placements) => placements
            .iter()
            .find_map(|placement| match placement {
                Placement::Auto => Some(Resolution::Auto),
                Placement::Floating => Some(Resolution::Floating),
                _ => placement
                    .side()
                    .filter(|side| ranked.contains(side))
                    .map(Resolution::Side),
            })
            .unwrap_or(Resolution::Unplaced),
    }
}

/// Keeps the previous side while it still fits on its arrow axis, otherwise
/// takes the side with the most extra space.
fn auto_select(previous: Option<Placement>, ranked: &[Side], input: &SolverInput<'_>) -> Option<Geometry> {
    if let Some(side) = previous.and_then(|placement| placement.side()) {
        let geometry = solve(side, input);
        if !main_axis_overflow(&geometry, side) {
            trace!(%side, "Keeping previous placement");
            return Some(geometry);
        }
        trace!(%side, "Previous placement no longer fits");
    }
    ranked.first().map(|side| solve(*side, input))
}

/// Centers the popover inside the visible part of a large anchor.
///
/// Returns `None` unless the visible part holds the content with
/// `inside_anchor_margin` to spare on every side.
fn inside_anchor(
    anchor: &Rect,
    display_area: &Rect,
    requested: &Size,
    config: &PlacementConfig,
) -> Option<Geometry> {
    let visible = anchor.intersection(display_area)?;
    let margin = config.inside_anchor_margin;
    let forced = Size::new(visible.width - 2.0 * margin, visible.height - 2.0 * margin);
    if forced.width < requested.width || forced.height < requested.height {
        trace!(?visible, "Anchor too small to host the popover");
        return None;
    }

    let x = visible.x + (visible.width - requested.width) / 2.0;
    let y = visible.y + (visible.height - requested.height) / 2.0;

    debug!(?visible, "Placing popover inside its anchor");
    Some(Geometry {
        popover_origin: Point::new(x, y),
        anchor_point: anchor.center(),
        placement: Placement::Floating,
        forced_content_size: forced,
        view_larger_than_display_area: ViewOverflow::default(),
    })
}

/// Centers the popover in the display area, nudged by the popover shift.
fn floating(request: &GeometryRequest, config: &PlacementConfig) -> Geometry {
    let display_area = request.display_area;
    let requested = request.requested_content_size;
    let epsilon = config.overflow_epsilon;

    let (x, width_overflow) = float_axis(
        display_area.x,
        display_area.width,
        requested.width,
        clamp_unit(request.popover_shift.x.unwrap_or(0.0)),
        epsilon,
    );
    let (y, height_overflow) = float_axis(
        display_area.y,
        display_area.height,
        requested.height,
        clamp_unit(request.popover_shift.y.unwrap_or(0.0)),
        epsilon,
    );

    trace!(x, y, "Floating popover");
    Geometry {
        popover_origin: Point::new(x, y),
        anchor_point: display_area.center(),
        placement: Placement::Floating,
        forced_content_size: requested.clamped_to(&display_area.size()),
        view_larger_than_display_area: ViewOverflow {
            width: width_overflow,
            height: height_overflow,
        },
    }
}

/// Returns the origin on one axis and whether the content overflows it.
fn float_axis(min: f64, extent: f64, requested: f64, shift: f64, epsilon: f64) -> (f64, bool) {
    let slack = extent - requested;
    let preferred = min + slack / 2.0;
    let bias = shift * (slack / 2.0).max(0.0);
    ((preferred + bias).max(min), preferred < min - epsilon)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.max(-1.0).min(1.0)
    } else {
        0.0
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
