use super::*;
use crate::doc::{AspectRatio, Element, ElementKind};

fn layout() -> Layout {
    let mut bg = Element::new("bg", "Background", ElementKind::Shape).sized(1920.0, 1080.0);
    bg.locked = true;
    let lower = Element::new("lower", "Lower", ElementKind::Shape).at(100.0, 100.0).sized(200.0, 100.0);
    let top = Element::new("top", "Top", ElementKind::Shape).at(150.0, 150.0).sized(200.0, 100.0);
    let mut ghost = Element::new("ghost", "Ghost", ElementKind::Shape).at(0.0, 0.0).sized(1920.0, 1080.0);
    ghost.hidden = true;
    Layout::new("l", "l", AspectRatio::Landscape)
        .add_element(bg)
        .add_element(lower)
        .add_element(top)
        .add_element(ghost)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// HitPart / ResizeAnchor
// =============================================================

#[test]
fn hit_part_resize_handle_equality() {
    assert_eq!(HitPart::ResizeHandle(ResizeAnchor::N), HitPart::ResizeHandle(ResizeAnchor::N));
    assert_ne!(HitPart::ResizeHandle(ResizeAnchor::N), HitPart::ResizeHandle(ResizeAnchor::S));
    assert_ne!(HitPart::Body, HitPart::ResizeHandle(ResizeAnchor::Se));
}

#[test]
fn resize_anchor_all_variants_distinct() {
    for (i, a) in ResizeAnchor::ALL.iter().enumerate() {
        for (j, b) in ResizeAnchor::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}

#[test]
fn resize_anchor_edges() {
    assert!(ResizeAnchor::Nw.moves_left() && ResizeAnchor::Nw.moves_top());
    assert!(ResizeAnchor::Se.moves_right() && ResizeAnchor::Se.moves_bottom());
    assert!(!ResizeAnchor::N.moves_left() && !ResizeAnchor::N.moves_right());
    assert!(!ResizeAnchor::E.moves_top() && !ResizeAnchor::E.moves_bottom());
}

#[test]
fn resize_anchor_point_on_rect() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(ResizeAnchor::Nw.point_on(&r), pt(10.0, 20.0));
    assert_eq!(ResizeAnchor::S.point_on(&r), pt(60.0, 70.0));
    assert_eq!(ResizeAnchor::E.point_on(&r), pt(110.0, 45.0));
}

// =============================================================
// hit_test: bodies
// =============================================================

#[test]
fn topmost_element_wins() {
    let hit = hit_test(pt(200.0, 200.0), &layout(), &Camera::default(), &Selection::new()).unwrap();
    assert_eq!(hit.element_id, "top");
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn lower_element_hit_outside_overlap() {
    let hit = hit_test(pt(110.0, 110.0), &layout(), &Camera::default(), &Selection::new()).unwrap();
    assert_eq!(hit.element_id, "lower");
}

#[test]
fn hidden_and_locked_are_transparent() {
    assert!(hit_test(pt(1000.0, 900.0), &layout(), &Camera::default(), &Selection::new()).is_none());
}

// =============================================================
// hit_test: handles
// =============================================================

#[test]
fn handle_of_single_selection_wins_over_body() {
    let mut sel = Selection::new();
    sel.select_only("lower");
    // Lower's SE corner is at (300, 200), inside "top".
    let hit = hit_test(pt(302.0, 198.0), &layout(), &Camera::default(), &sel).unwrap();
    assert_eq!(hit.element_id, "lower");
    assert_eq!(hit.part, HitPart::ResizeHandle(ResizeAnchor::Se));
}

#[test]
fn handle_radius_is_screen_space() {
    let mut sel = Selection::new();
    sel.select_only("lower");
    // At scale 0.5 the 8px screen radius covers 16 stage px.
    let cam = Camera::with_scale(0.5);
    let hit = hit_test(pt(85.0, 86.0), &layout(), &cam, &sel).unwrap();
    assert_eq!(hit.part, HitPart::ResizeHandle(ResizeAnchor::Nw));
    let miss = hit_test(pt(85.0, 86.0), &layout(), &Camera::default(), &sel);
    assert!(miss.is_none());
}

#[test]
fn no_handles_for_multi_selection() {
    let sel = Selection::from_ids(["lower".to_owned(), "top".to_owned()]);
    let hit = hit_test(pt(300.0, 200.0), &layout(), &Camera::default(), &sel).unwrap();
    assert_eq!(hit.part, HitPart::Body);
    assert_eq!(hit.element_id, "top");
}

#[test]
fn no_handles_for_locked_selection() {
    let mut sel = Selection::new();
    sel.select_only("bg");
    assert!(hit_test(pt(0.0, 0.0), &layout(), &Camera::default(), &sel).is_none());
}
