#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 70.0);
    assert_eq!(r.center(), Point::new(60.0, 45.0));
}

#[test]
fn rect_contains_is_edge_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.1)));
}

#[test]
fn rect_union_covers_both() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, -5.0, 5.0, 5.0);
    assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
}

#[test]
fn rect_union_all_empty_is_none() {
    assert!(Rect::union_all(Vec::new()).is_none());
}

#[test]
fn rect_union_all_many() {
    let rects = vec![
        Rect::new(5.0, 5.0, 1.0, 1.0),
        Rect::new(-3.0, 2.0, 2.0, 2.0),
        Rect::new(10.0, 10.0, 5.0, 5.0),
    ];
    assert_eq!(Rect::union_all(rects), Some(Rect::new(-3.0, 2.0, 18.0, 13.0)));
}

// =============================================================
// Axis
// =============================================================

#[test]
fn dominant_axis_prefers_larger_magnitude() {
    assert_eq!(Axis::dominant(10.0, 2.0), Axis::X);
    assert_eq!(Axis::dominant(-10.0, 2.0), Axis::X);
    assert_eq!(Axis::dominant(1.0, -7.0), Axis::Y);
}

#[test]
fn dominant_axis_tie_is_y() {
    assert_eq!(Axis::dominant(5.0, 5.0), Axis::Y);
    assert_eq!(Axis::dominant(0.0, 0.0), Axis::Y);
}

#[test]
fn constrain_zeroes_the_other_axis() {
    assert_eq!(Axis::X.constrain(4.0, 9.0), (4.0, 0.0));
    assert_eq!(Axis::Y.constrain(4.0, 9.0), (0.0, 9.0));
}

#[test]
fn axis_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Axis::X).unwrap(), "\"x\"");
    let y: Axis = serde_json::from_str("\"y\"").unwrap();
    assert_eq!(y, Axis::Y);
}

// =============================================================
// snap_to_grid
// =============================================================

#[test]
fn snap_rounds_to_nearest_step() {
    assert_eq!(snap_to_grid(14.0, 10.0), 10.0);
    assert_eq!(snap_to_grid(15.0, 10.0), 20.0);
    assert_eq!(snap_to_grid(-14.0, 10.0), -10.0);
    assert_eq!(snap_to_grid(100.0, 10.0), 100.0);
}

#[test]
fn snap_with_non_positive_step_is_identity() {
    assert_eq!(snap_to_grid(13.7, 0.0), 13.7);
    assert_eq!(snap_to_grid(13.7, -5.0), 13.7);
}

// =============================================================
// fit_to_stage
// =============================================================

#[test]
fn fit_small_image_is_not_upscaled() {
    assert_eq!(fit_to_stage(400.0, 300.0, 1920.0, 1080.0), (400.0, 300.0));
}

#[test]
fn fit_wide_image_is_limited_by_width() {
    assert_eq!(fit_to_stage(3840.0, 1000.0, 1920.0, 1080.0), (1920.0, 500.0));
}

#[test]
fn fit_tall_image_is_limited_by_height() {
    assert_eq!(fit_to_stage(1000.0, 2160.0, 1920.0, 1080.0), (500.0, 1080.0));
}

#[test]
fn fit_degenerate_image_passes_through() {
    assert_eq!(fit_to_stage(0.0, 100.0, 1920.0, 1080.0), (0.0, 100.0));
}
