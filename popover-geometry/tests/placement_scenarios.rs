use popover_core::config::POPOVER_MARGIN;
use popover_core::types::{Placement, Point, Rect, Size};
use popover_geometry::{compute_geometry, Geometry, GeometryRequest, ViewOverflow};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn display() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 400.0)
}

fn anchored(anchor: Rect, size: Size) -> GeometryRequest {
    GeometryRequest::new(size, display()).with_anchor(anchor)
}

#[test]
fn off_screen_anchor_resolves_to_right() {
    let request = anchored(Rect::new(-100.0, -100.0, 20.0, 20.0), Size::new(200.0, 200.0));
    let geometry = compute_geometry(&request);

    assert_eq!(geometry.placement, Placement::Right);
    assert_eq!(geometry.popover_origin.x, 8.0);
    assert_eq!(geometry.anchor_point.x, 0.0);
    // Cross axis kept clear of the margin, arrow clear of the rounded corner.
    assert_eq!(geometry.popover_origin, Point::new(8.0, 10.0));
    assert_eq!(geometry.anchor_point, Point::new(0.0, 21.0));
    assert_eq!(geometry.view_larger_than_display_area, ViewOverflow::default());
}

#[test]
fn missing_anchor_floats_in_center() {
    let geometry = compute_geometry(&GeometryRequest::new(Size::new(200.0, 200.0), display()));
    assert_eq!(geometry.placement, Placement::Floating);
    assert_eq!(geometry.popover_origin, Point::new(100.0, 100.0));
    assert_eq!(geometry.anchor_point, Point::new(200.0, 200.0));
}

#[test]
fn floating_content_is_clamped_to_display_area() {
    let request = GeometryRequest::new(Size::new(200.0, 400.0), Rect::new(0.0, 0.0, 400.0, 200.0));
    let geometry = compute_geometry(&request);
    assert_eq!(geometry.forced_content_size, Size::new(200.0, 200.0));
    assert_eq!(
        geometry.view_larger_than_display_area,
        ViewOverflow { width: false, height: true }
    );
    assert_eq!(geometry.popover_origin, Point::new(100.0, 0.0));
}

#[test]
fn anchor_above_display_resolves_to_bottom() {
    let request = anchored(Rect::new(190.0, -100.0, 20.0, 20.0), Size::new(200.0, 200.0));
    let geometry = compute_geometry(&request);
    assert_eq!(geometry.placement, Placement::Bottom);
    // Centered under the anchor; y is the pinned anchor bottom plus the arrow height.
    assert_eq!(geometry.popover_origin, Point::new(100.0, 8.0));
    assert_eq!(geometry.anchor_point, Point::new(200.0, 0.0));
}

#[test]
fn one_pixel_shrink_keeps_geometry_equal() {
    let anchor = Rect::new(-100.0, -100.0, 20.0, 20.0);
    let before = compute_geometry(&anchored(anchor, Size::new(200.0, 200.0)));
    let after = compute_geometry(&anchored(anchor, Size::new(199.0, 199.0)));
    assert_eq!(before, after);
}

// Centered placements move by half the shrink and report the shrunk size, so
// a 1px change is only absorbed where the popover is pinned to an edge.
#[test]
fn one_pixel_shrink_of_centered_popover_is_reported() {
    let floating_before = compute_geometry(&GeometryRequest::new(Size::new(200.0, 200.0), display()));
    let floating_after = compute_geometry(&GeometryRequest::new(Size::new(199.0, 199.0), display()));
    assert_eq!(floating_after.forced_content_size, Size::new(199.0, 199.0));
    assert_ne!(floating_before, floating_after);

    let anchor = Rect::new(190.0, -100.0, 20.0, 20.0);
    let bottom_before = compute_geometry(&anchored(anchor, Size::new(200.0, 200.0)));
    let bottom_after = compute_geometry(&anchored(anchor, Size::new(199.0, 199.0)));
    assert_eq!(bottom_after.placement, Placement::Bottom);
    assert_eq!(bottom_after.popover_origin, Point::new(100.5, 8.0));
    assert_ne!(bottom_before, bottom_after);
}

#[test]
fn sub_pixel_jitter_keeps_floating_geometry_equal() {
    let before = compute_geometry(&GeometryRequest::new(Size::new(200.0, 200.0), display()));
    let after = compute_geometry(&GeometryRequest::new(Size::new(200.4, 199.7), display()));
    assert_eq!(before, after);
}

#[test]
fn identical_inputs_give_identical_geometry() {
    let request = anchored(Rect::new(120.0, 300.0, 60.0, 30.0), Size::new(150.0, 90.0))
        .with_placement(vec![Placement::Left, Placement::Auto])
        .with_arrow_shift(0.3);
    let first = compute_geometry(&request);
    for _ in 0..10 {
        let again = compute_geometry(&request);
        assert_eq!(again, first);
        assert_eq!(again.popover_origin.x, first.popover_origin.x);
    }
}

fn view_rect(geometry: &Geometry, requested: &Size) -> Rect {
    Rect::from_origin_size(geometry.popover_origin, geometry.view_size(requested))
}

#[rstest]
fn popover_stays_inside_display_area(
    #[values(
        Placement::Auto,
        Placement::Top,
        Placement::Bottom,
        Placement::Left,
        Placement::Right,
        Placement::Floating
    )]
    placement: Placement,
    #[values(
        Rect::new(-100.0, -100.0, 20.0, 20.0),
        Rect::new(190.0, 190.0, 20.0, 20.0),
        Rect::new(380.0, 10.0, 20.0, 20.0),
        Rect::new(0.0, 380.0, 400.0, 20.0),
        Rect::new(20.0, 20.0, 360.0, 360.0),
        Rect::new(500.0, 600.0, 40.0, 40.0)
    )]
    anchor: Rect,
    #[values(Size::new(0.0, 0.0), Size::new(50.0, 30.0), Size::new(200.0, 200.0), Size::new(390.0, 500.0))]
    requested: Size,
) {
    let request = anchored(anchor, requested).with_placement(placement);
    let geometry = compute_geometry(&request);

    assert_ne!(geometry.placement, Placement::Auto);
    assert!(geometry.forced_content_size.width >= 0.0);
    assert!(geometry.forced_content_size.height >= 0.0);

    let bounds = display().inset(-POPOVER_MARGIN, -POPOVER_MARGIN, -POPOVER_MARGIN, -POPOVER_MARGIN);
    let view = view_rect(&geometry, &requested);
    assert!(
        bounds.contains_rect_within(&view, 1e-6),
        "{:?} escaped the display area for {:?}",
        view,
        request
    );
}

fn mirror(rect: Rect, area: &Rect) -> Rect {
    Rect::new(area.x + area.right() - rect.right(), rect.y, rect.width, rect.height)
}

#[rstest]
#[case(Rect::new(250.0, 100.0, 40.0, 30.0))]
#[case(Rect::new(300.0, 0.0, 20.0, 20.0))]
#[case(Rect::new(150.0, 260.0, 100.0, 20.0))]
fn left_and_right_mirror_each_other(#[case] anchor: Rect) {
    let area = Rect::new(0.0, 0.0, 400.0, 300.0);
    let requested = Size::new(80.0, 60.0);

    let left = compute_geometry(
        &GeometryRequest::new(requested, area)
            .with_anchor(anchor)
            .with_placement(Placement::Left),
    );
    let right = compute_geometry(
        &GeometryRequest::new(requested, area)
            .with_anchor(mirror(anchor, &area))
            .with_placement(Placement::Right),
    );

    assert_eq!(left.placement, Placement::Left);
    assert_eq!(right.placement, Placement::Right);
    let view = left.view_size(&requested);
    assert_eq!(
        right.popover_origin,
        Point::new(area.right() - left.popover_origin.x - view.width, left.popover_origin.y)
    );
    assert_eq!(
        right.anchor_point,
        Point::new(area.right() - left.anchor_point.x, left.anchor_point.y)
    );
    assert_eq!(right.forced_content_size, left.forced_content_size);
    assert_eq!(right.view_larger_than_display_area, left.view_larger_than_display_area);
}

#[test]
fn auto_keeps_previous_placement_while_it_fits() {
    let request = anchored(Rect::new(150.0, 150.0, 20.0, 100.0), Size::new(100.0, 50.0));
    assert_eq!(compute_geometry(&request).placement, Placement::Right);

    let sticky = request.with_previous_placement(Placement::Left);
    assert_eq!(compute_geometry(&sticky).placement, Placement::Left);
}

#[test]
fn auto_drops_previous_placement_once_it_overflows() {
    let request = anchored(Rect::new(60.0, 150.0, 20.0, 100.0), Size::new(100.0, 50.0))
        .with_previous_placement(Placement::Left);
    assert_eq!(compute_geometry(&request).placement, Placement::Right);
}

#[rstest]
#[case(Rect::new(0.0, 0.0, 400.0, 400.0), Size::new(100.0, 80.0), Point::new(150.0, 160.0))]
#[case(Rect::new(50.0, 100.0, 300.0, 200.0), Size::new(300.0, 200.0), Point::new(50.0, 100.0))]
#[case(Rect::new(-40.0, 0.0, 200.0, 100.0), Size::new(50.0, 20.0), Point::new(35.0, 40.0))]
fn missing_anchor_always_floats(#[case] area: Rect, #[case] requested: Size, #[case] origin: Point) {
    let geometry = compute_geometry(&GeometryRequest::new(requested, area).with_placement(Placement::Top));
    assert_eq!(geometry.placement, Placement::Floating);
    assert_eq!(geometry.popover_origin, origin);
    assert_eq!(geometry.anchor_point, area.center());
}

#[test]
fn placement_list_takes_first_side_that_fits() {
    let anchor = Rect::new(190.0, 20.0, 20.0, 20.0);
    let request = anchored(anchor, Size::new(100.0, 80.0)).with_placement(vec![Placement::Top, Placement::Bottom]);
    let geometry = compute_geometry(&request);
    assert_eq!(geometry.placement, Placement::Bottom);
    assert_eq!(geometry.popover_origin, Point::new(150.0, 48.0));
}

#[test]
fn placement_list_without_fitting_side_floats() {
    let anchor = Rect::new(190.0, 20.0, 20.0, 20.0);
    let request = anchored(anchor, Size::new(100.0, 80.0)).with_placement(vec![Placement::Top]);
    let geometry = compute_geometry(&request);
    assert_eq!(geometry.placement, Placement::Floating);
    assert_eq!(geometry.anchor_point, display().center());
}

#[test]
fn large_anchor_hosts_the_popover_inside() {
    let anchor = Rect::new(20.0, 20.0, 360.0, 360.0);
    let geometry = compute_geometry(&anchored(anchor, Size::new(100.0, 100.0)));
    assert_eq!(geometry.placement, Placement::Floating);
    assert_eq!(geometry.popover_origin, Point::new(150.0, 150.0));
    assert_eq!(geometry.anchor_point, Point::new(200.0, 200.0));
    assert_eq!(geometry.forced_content_size, Size::new(340.0, 340.0));
    assert!(!geometry.view_larger_than_display_area.any());
}

#[test]
fn anchor_without_room_for_inside_margin_floats_the_whole_content() {
    let anchor = Rect::new(5.0, 5.0, 390.0, 390.0);
    let geometry = compute_geometry(&anchored(anchor, Size::new(385.0, 100.0)));
    assert_eq!(geometry.placement, Placement::Floating);
    assert_eq!(geometry.popover_origin, Point::new(7.5, 150.0));
    assert_eq!(geometry.forced_content_size, Size::new(385.0, 100.0));
    assert_eq!(geometry.anchor_point, display().center());
    assert!(!geometry.view_larger_than_display_area.any());
}

#[rstest]
#[case(Size::new(370.0, 100.0), true)]
#[case(Size::new(371.0, 100.0), false)]
#[case(Size::new(100.0, 370.0), true)]
#[case(Size::new(100.0, 371.0), false)]
fn inside_anchor_needs_margin_on_both_axes(#[case] requested: Size, #[case] inside: bool) {
    let anchor = Rect::new(5.0, 5.0, 390.0, 390.0);
    let geometry = compute_geometry(&anchored(anchor, requested));
    assert_eq!(geometry.placement, Placement::Floating);
    assert!(!geometry.view_larger_than_display_area.any());
    // Inside the anchor the forced size is the padded anchor, floating keeps the request.
    let expected_forced = if inside { Size::new(370.0, 370.0) } else { requested };
    assert_eq!(geometry.forced_content_size, expected_forced);
}

#[test]
fn explicit_side_that_overflows_falls_back_inside_anchor() {
    let anchor = Rect::new(20.0, 20.0, 360.0, 360.0);
    let request = anchored(anchor, Size::new(100.0, 100.0)).with_placement(Placement::Top);
    assert_eq!(compute_geometry(&request).placement, Placement::Floating);
}

#[test]
fn explicit_side_is_kept_when_nothing_better_exists() {
    let request = anchored(Rect::new(180.0, 30.0, 40.0, 20.0), Size::new(100.0, 80.0)).with_placement(Placement::Top);
    let geometry = compute_geometry(&request);
    assert_eq!(geometry.placement, Placement::Top);
    assert!(geometry.view_larger_than_display_area.height);
    assert_eq!(geometry.forced_content_size.height, 12.0);
    assert_eq!(geometry.popover_origin, Point::new(150.0, 10.0));
}

#[test]
fn auto_with_cross_axis_shortfall_floats() {
    let request = anchored(Rect::new(190.0, -100.0, 20.0, 20.0), Size::new(385.0, 100.0));
    let geometry = compute_geometry(&request);
    assert_eq!(geometry.placement, Placement::Floating);
    assert_eq!(geometry.popover_origin, Point::new(7.5, 150.0));
}

#[test]
fn offset_is_honored_by_auto_selection() {
    let anchor = Rect::new(150.0, 150.0, 20.0, 20.0);
    let plain = compute_geometry(&anchored(anchor, Size::new(60.0, 40.0)));
    let offset = compute_geometry(&anchored(anchor, Size::new(60.0, 40.0)).with_offset(10.0));
    assert_eq!(plain.placement, Placement::Bottom);
    assert_eq!(offset.placement, Placement::Bottom);
    assert_eq!(offset.popover_origin.y - plain.popover_origin.y, 10.0);
}
