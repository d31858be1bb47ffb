//! Directional solvers: place the popover on one side of the anchor.
//!
//! All four sides share one implementation. A side is described by which axis
//! carries the arrow (the main axis) and whether the popover sits before the
//! anchor on that axis (`Top`, `Left`) or after it (`Bottom`, `Right`).

use crate::geometry::{Geometry, ViewOverflow};
use popover_core::config::PlacementConfig;
use popover_core::types::{Placement, Point, Rect, Side, Size};

/// Inputs shared by every directional solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverInput<'a> {
    /// The sanitized anchor.
    pub anchor: &'a Rect,
    pub display_area: &'a Rect,
    pub requested: Size,
    pub arrow_size: Size,
    pub border_radius: f64,
    /// Clamped to `-1.0..=1.0`.
    pub arrow_shift: f64,
    pub offset: f64,
    pub config: &'a PlacementConfig,
}

/// A rectangle seen as (main, cross) spans for one side.
struct Spans {
    main_min: f64,
    main_max: f64,
    cross_min: f64,
    cross_max: f64,
}

impl Spans {
    fn of(rect: &Rect, side: Side) -> Self {
        if side.is_horizontal() {
            Spans {
                main_min: rect.left(),
                main_max: rect.right(),
                cross_min: rect.top(),
                cross_max: rect.bottom(),
            }
        } else {
            Spans {
                main_min: rect.top(),
                main_max: rect.bottom(),
                cross_min: rect.left(),
                cross_max: rect.right(),
            }
        }
    }

    fn cross_len(&self) -> f64 {
        self.cross_max - self.cross_min
    }

    fn cross_center(&self) -> f64 {
        self.cross_min + self.cross_len() / 2.0
    }
}

/// Splits a size into (main, cross) components for `side`.
fn split(size: &Size, side: Side) -> (f64, f64) {
    if side.is_horizontal() {
        (size.width, size.height)
    } else {
        (size.height, size.width)
    }
}

/// Joins (main, cross) components back into x/y order for `side`.
fn join(main: f64, cross: f64, side: Side) -> (f64, f64) {
    if side.is_horizontal() {
        (main, cross)
    } else {
        (cross, main)
    }
}

/// The display area with the margin applied on every side except the arrow side.
fn usable_area(display_area: &Rect, side: Side, margin: f64) -> Rect {
    match side {
        Side::Top => display_area.inset(margin, margin, margin, 0.0),
        Side::Bottom => display_area.inset(margin, 0.0, margin, margin),
        Side::Left => display_area.inset(margin, margin, 0.0, margin),
        Side::Right => display_area.inset(0.0, margin, margin, margin),
    }
}

/// Computes the geometry of a popover attached to `side` of the anchor.
pub fn solve(side: Side, input: &SolverInput<'_>) -> Geometry {
    let epsilon = input.config.overflow_epsilon;
    let area = Spans::of(&usable_area(input.display_area, side, input.config.popover_margin), side);
    let anchor = Spans::of(input.anchor, side);
    let (requested_main, requested_cross) = split(&input.requested, side);
    let thickness = input.arrow_size.height + input.offset;
    let leading = matches!(side, Side::Top | Side::Left);

    // Main axis: the popover body starts `thickness` away from the anchor edge.
    let (available_main, main_overflow) = if leading {
        let edge = anchor.main_min - thickness;
        (edge - area.main_min, edge - requested_main < area.main_min - epsilon)
    } else {
        let edge = anchor.main_max + thickness;
        (area.main_max - edge, edge + requested_main > area.main_max + epsilon)
    };
    let forced_main = available_main.max(0.0);
    let forced_cross = area.cross_len();
    let cross_overflow = requested_cross > forced_cross + epsilon;

    let view_main = if main_overflow { forced_main } else { requested_main };
    let view_cross = if cross_overflow { forced_cross } else { requested_cross };

    let origin_main = if leading {
        (anchor.main_min - thickness - view_main).max(area.main_min)
    } else {
        (anchor.main_max + thickness).min(area.main_max - view_main)
    };
    let origin_cross = (anchor.cross_center() - view_cross / 2.0)
        .max(area.cross_min)
        .min(area.cross_max - view_cross);

    let anchor_main = if leading { anchor.main_min } else { anchor.main_max };
    let shifted_cross = anchor.cross_center() + input.arrow_shift * 0.5 * anchor.cross_len();
    // Keep the arrow off the popover's rounded corners.
    let arrow_inset = input.arrow_size.width / 2.0 + input.border_radius;
    let lowest = origin_cross + arrow_inset;
    let highest = origin_cross + view_cross - arrow_inset;
    let anchor_cross = if lowest <= highest {
        shifted_cross.max(lowest).min(highest)
    } else {
        origin_cross + view_cross / 2.0
    };

    let (origin_x, origin_y) = join(origin_main, origin_cross, side);
    let (anchor_x, anchor_y) = join(anchor_main, anchor_cross, side);
    let (forced_width, forced_height) = join(forced_main, forced_cross, side);
    let (width_overflow, height_overflow) = if side.is_horizontal() {
        (main_overflow, cross_overflow)
    } else {
        (cross_overflow, main_overflow)
    };

    Geometry {
        popover_origin: Point::new(origin_x, origin_y),
        anchor_point: Point::new(anchor_x, anchor_y),
        placement: Placement::from(side),
        forced_content_size: Size::new(forced_width, forced_height),
        view_larger_than_display_area: ViewOverflow {
            width: width_overflow,
            height: height_overflow,
        },
    }
}

/// Returns whether `geometry` overflowed on the axis that carries the arrow.
pub(crate) fn main_axis_overflow(geometry: &Geometry, side: Side) -> bool {
    if side.is_horizontal() {
        geometry.view_larger_than_display_area.width
    } else {
        geometry.view_larger_than_display_area.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn solve_with(side: Side, anchor: Rect, requested: Size) -> Geometry {
        let display_area = Rect::new(0.0, 0.0, 400.0, 400.0);
        let config = PlacementConfig::default();
        solve(
            side,
            &SolverInput {
                anchor: &anchor,
                display_area: &display_area,
                requested,
                arrow_size: Size::new(16.0, 8.0),
                border_radius: 3.0,
                arrow_shift: 0.0,
                offset: 0.0,
                config: &config,
            },
        )
    }

    #[test]
    fn top_centers_above_anchor() {
        let geometry = solve_with(Side::Top, Rect::new(180.0, 300.0, 40.0, 20.0), Size::new(100.0, 80.0));
        assert_eq!(geometry.placement, Placement::Top);
        assert_eq!(geometry.popover_origin, Point::new(150.0, 212.0));
        assert_eq!(geometry.anchor_point, Point::new(200.0, 300.0));
        assert_eq!(geometry.forced_content_size, Size::new(380.0, 282.0));
        assert_eq!(geometry.view_larger_than_display_area, ViewOverflow::default());
    }

    #[test]
    fn bottom_clamps_cross_axis_to_margin() {
        let geometry = solve_with(Side::Bottom, Rect::new(0.0, 50.0, 20.0, 20.0), Size::new(100.0, 80.0));
        assert_eq!(geometry.popover_origin, Point::new(10.0, 78.0));
        // Arrow pulled inward past the corner radius: 10 + 8 + 3.
        assert_eq!(geometry.anchor_point, Point::new(21.0, 70.0));
    }

    #[test]
    fn main_axis_overflow_uses_remaining_space() {
        let geometry = solve_with(Side::Top, Rect::new(180.0, 60.0, 40.0, 20.0), Size::new(100.0, 80.0));
        assert!(geometry.view_larger_than_display_area.height);
        assert!(!geometry.view_larger_than_display_area.width);
        assert_eq!(geometry.forced_content_size.height, 42.0);
        assert_eq!(geometry.popover_origin, Point::new(150.0, 10.0));
        assert!(main_axis_overflow(&geometry, Side::Top));
    }

    #[test]
    fn overflow_within_one_pixel_is_tolerated() {
        // Exactly 80.5px of room above for 81px of content.
        let geometry = solve_with(Side::Top, Rect::new(180.0, 98.5, 40.0, 20.0), Size::new(100.0, 81.0));
        assert!(!geometry.view_larger_than_display_area.height);
    }

    #[test]
    fn cross_axis_overflow_fills_the_usable_extent() {
        let geometry = solve_with(Side::Right, Rect::new(20.0, 150.0, 20.0, 20.0), Size::new(100.0, 500.0));
        assert!(geometry.view_larger_than_display_area.height);
        assert!(!geometry.view_larger_than_display_area.width);
        assert_eq!(geometry.forced_content_size, Size::new(342.0, 380.0));
        assert_eq!(geometry.popover_origin, Point::new(48.0, 10.0));
    }

    #[rstest]
    #[case(1.0, 250.0)]
    #[case(-1.0, 150.0)]
    #[case(0.5, 225.0)]
    #[case(3.0, 289.0)]
    fn arrow_shift_moves_anchor_point_only(#[case] shift: f64, #[case] expected_x: f64) {
        let anchor = Rect::new(150.0, 100.0, 100.0, 20.0);
        let display_area = Rect::new(0.0, 0.0, 400.0, 400.0);
        let config = PlacementConfig::default();
        let mut input = SolverInput {
            anchor: &anchor,
            display_area: &display_area,
            requested: Size::new(200.0, 40.0),
            arrow_size: Size::new(16.0, 8.0),
            border_radius: 3.0,
            arrow_shift: 0.0,
            offset: 0.0,
            config: &config,
        };
        let centered = solve(Side::Bottom, &input);
        input.arrow_shift = shift;
        let shifted = solve(Side::Bottom, &input);

        assert_eq!(shifted.popover_origin, centered.popover_origin);
        assert_eq!(shifted.anchor_point.x, expected_x);
    }

    #[test]
    fn offset_pushes_popover_away_from_anchor() {
        let anchor = Rect::new(100.0, 100.0, 20.0, 20.0);
        let display_area = Rect::new(0.0, 0.0, 400.0, 400.0);
        let config = PlacementConfig::default();
        let geometry = solve(
            Side::Right,
            &SolverInput {
                anchor: &anchor,
                display_area: &display_area,
                requested: Size::new(60.0, 40.0),
                arrow_size: Size::new(16.0, 8.0),
                border_radius: 3.0,
                arrow_shift: 0.0,
                offset: 12.0,
                config: &config,
            },
        );
        assert_eq!(geometry.popover_origin.x, 140.0);
        assert_eq!(geometry.anchor_point.x, 120.0);
    }
}
