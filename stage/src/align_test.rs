#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{AspectRatio, ElementKind};

fn el(id: &str, x: f64, y: f64, w: f64, h: f64) -> Element {
    Element::new(id, id, ElementKind::Shape).at(x, y).sized(w, h)
}

fn layout() -> Layout {
    Layout::new("l", "l", AspectRatio::Landscape)
        .add_element(el("a", 100.0, 50.0, 80.0, 40.0))
        .add_element(el("b", 300.0, 200.0, 120.0, 60.0))
        .add_element(el("c", 40.0, 400.0, 200.0, 20.0))
        .add_element(el("d", 900.0, 10.0, 50.0, 50.0))
}

fn sel(ids: &[&str]) -> Selection {
    Selection::from_ids(ids.iter().map(|s| (*s).to_owned()))
}

fn x(l: &Layout, id: &str) -> f64 {
    l.get(id).unwrap().geometry.x
}

fn y(l: &Layout, id: &str) -> f64 {
    l.get(id).unwrap().geometry.y
}

// =============================================================
// Align to selection
// =============================================================

#[test]
fn align_left_sets_min_x() {
    let l = align(&layout(), &sel(&["a", "b", "c"]), AlignMode::Left, AlignTarget::Selection);
    for id in ["a", "b", "c"] {
        assert_eq!(x(&l, id), 40.0);
    }
    assert_eq!(x(&l, "d"), 900.0);
}

#[test]
fn align_right_sets_max_right() {
    let l = align(&layout(), &sel(&["a", "b", "c"]), AlignMode::Right, AlignTarget::Selection);
    // max(x + width) = 420
    assert_eq!(x(&l, "a"), 340.0);
    assert_eq!(x(&l, "b"), 300.0);
    assert_eq!(x(&l, "c"), 220.0);
}

#[test]
fn align_center_uses_bounds_midpoint() {
    let l = align(&layout(), &sel(&["a", "b", "c"]), AlignMode::Center, AlignTarget::Selection);
    // (40 + 420) / 2 = 230
    assert_eq!(x(&l, "a"), 190.0);
    assert_eq!(x(&l, "b"), 170.0);
    assert_eq!(x(&l, "c"), 130.0);
}

#[test]
fn align_does_not_touch_other_axis() {
    let l = align(&layout(), &sel(&["a", "b"]), AlignMode::Left, AlignTarget::Selection);
    assert_eq!(y(&l, "a"), 50.0);
    assert_eq!(y(&l, "b"), 200.0);
}

#[test]
fn align_vertical_modes() {
    let base = layout();
    let s = sel(&["a", "b"]);
    let top = align(&base, &s, AlignMode::Top, AlignTarget::Selection);
    assert_eq!((y(&top, "a"), y(&top, "b")), (50.0, 50.0));
    let bottom = align(&base, &s, AlignMode::Bottom, AlignTarget::Selection);
    assert_eq!((y(&bottom, "a"), y(&bottom, "b")), (220.0, 200.0));
    let middle = align(&base, &s, AlignMode::Middle, AlignTarget::Selection);
    // (50 + 260) / 2 = 155
    assert_eq!((y(&middle, "a"), y(&middle, "b")), (135.0, 125.0));
}

#[test]
fn align_selection_with_one_element_is_noop() {
    let base = layout();
    let l = align(&base, &sel(&["b"]), AlignMode::Left, AlignTarget::Selection);
    assert_eq!(l, base);
}

#[test]
fn align_ignores_unknown_ids_when_counting() {
    let base = layout();
    let l = align(&base, &sel(&["b", "ghost"]), AlignMode::Left, AlignTarget::Selection);
    assert_eq!(l, base);
}

// =============================================================
// Align to stage
// =============================================================

#[test]
fn align_stage_applies_to_single_element() {
    let l = align(&layout(), &sel(&["b"]), AlignMode::Right, AlignTarget::Stage);
    assert_eq!(x(&l, "b"), 1800.0);
}

#[test]
fn align_stage_center_each_independently() {
    let l = align(&layout(), &sel(&["a", "c"]), AlignMode::Center, AlignTarget::Stage);
    assert_eq!(x(&l, "a"), 920.0);
    assert_eq!(x(&l, "c"), 860.0);
}

#[test]
fn align_stage_portrait_uses_portrait_bounds() {
    let base = Layout::new("p", "p", AspectRatio::Portrait).add_element(el("a", 0.0, 0.0, 100.0, 100.0));
    let l = align(&base, &sel(&["a"]), AlignMode::Bottom, AlignTarget::Stage);
    assert_eq!(y(&l, "a"), 1820.0);
}

#[test]
fn align_stage_with_empty_selection_is_noop() {
    let base = layout();
    assert_eq!(align(&base, &Selection::new(), AlignMode::Left, AlignTarget::Stage), base);
}

// =============================================================
// Distribute
// =============================================================

#[test]
fn distribute_keeps_endpoints_fixed() {
    let base = layout();
    let l = distribute(&base, &sel(&["a", "b", "c", "d"]), Axis::X);
    // Sorted by x: c(40), a(100), b(300), d(900).
    assert_eq!(x(&l, "c"), 40.0);
    assert_eq!(x(&l, "d"), 900.0);
    let step = (900.0 - 40.0) / 3.0;
    assert!((x(&l, "a") - (40.0 + step)).abs() < 1e-9);
    assert!((x(&l, "b") - (40.0 + 2.0 * step)).abs() < 1e-9);
}

#[test]
fn distribute_y_moves_only_y() {
    let l = distribute(&layout(), &sel(&["a", "b", "c"]), Axis::Y);
    // Sorted by y: a(50), b(200), c(400).
    assert_eq!(y(&l, "a"), 50.0);
    assert_eq!(y(&l, "b"), 225.0);
    assert_eq!(y(&l, "c"), 400.0);
    assert_eq!(x(&l, "b"), 300.0);
}

#[test]
fn distribute_needs_three() {
    let base = layout();
    assert_eq!(distribute(&base, &sel(&["a", "b"]), Axis::X), base);
}

#[test]
fn distribute_shares_untouched_elements() {
    let base = layout();
    let l = distribute(&base, &sel(&["a", "b", "c"]), Axis::Y);
    assert!(l.shares_element(&base, "d"));
    assert!(l.shares_element(&base, "a"));
    assert!(!l.shares_element(&base, "b"));
}

#[test]
fn align_mode_axes() {
    assert_eq!(AlignMode::Center.axis(), Axis::X);
    assert_eq!(AlignMode::Middle.axis(), Axis::Y);
}
