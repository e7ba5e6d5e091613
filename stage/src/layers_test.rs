use super::*;
use crate::doc::{AspectRatio, Element, ElementKind};

fn layout(ids: &[&str]) -> Layout {
    ids.iter().fold(Layout::new("l", "l", AspectRatio::Landscape), |l, id| {
        l.add_element(Element::new(*id, id.to_uppercase(), ElementKind::Shape))
    })
}

// =============================================================
// Index conversion
// =============================================================

#[test]
fn ui_index_is_reversed_paint_index() {
    assert_eq!(ui_to_paint_index(4, 0), Some(3));
    assert_eq!(ui_to_paint_index(4, 3), Some(0));
    assert_eq!(ui_to_paint_index(4, 4), None);
    assert_eq!(ui_to_paint_index(0, 0), None);
}

#[test]
fn conversion_is_its_own_inverse() {
    for i in 0..5 {
        let paint = ui_to_paint_index(5, i).unwrap();
        assert_eq!(paint_to_ui_index(5, paint), Some(i));
    }
}

#[test]
fn layer_list_is_top_first() {
    let rows = layer_list(&layout(&["bg", "headline", "ticker"]));
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["ticker", "headline", "bg"]);
    assert_eq!(rows[0].name, "TICKER");
    assert_eq!(rows[0].kind, "shape");
}

// =============================================================
// Move up / down
// =============================================================

#[test]
fn move_up_swaps_with_next() {
    let l = move_element(&layout(&["a", "b", "c"]), "a", Direction::Up);
    assert_eq!(l.ids(), ["b", "a", "c"]);
}

#[test]
fn move_down_swaps_with_previous() {
    let l = move_element(&layout(&["a", "b", "c"]), "c", Direction::Down);
    assert_eq!(l.ids(), ["a", "c", "b"]);
}

#[test]
fn move_top_up_is_noop() {
    let base = layout(&["a", "b", "c"]);
    assert_eq!(move_element(&base, "c", Direction::Up), base);
}

#[test]
fn move_bottom_down_is_noop() {
    let base = layout(&["a", "b", "c"]);
    assert_eq!(move_element(&base, "a", Direction::Down), base);
}

#[test]
fn move_unknown_is_noop() {
    let base = layout(&["a", "b"]);
    assert_eq!(move_element(&base, "ghost", Direction::Up), base);
}

// =============================================================
// Drag-to-reorder
// =============================================================

#[test]
fn reorder_top_row_to_bottom_row() {
    // UI: [c, b, a]; dragging c to the last row sends it to the back.
    let l = reorder_from_ui(&layout(&["a", "b", "c"]), 0, 2);
    assert_eq!(l.ids(), ["c", "a", "b"]);
}

#[test]
fn reorder_bottom_row_up_one() {
    // UI: [d, c, b, a]; dragging a to row 2 gives [d, c, a, b].
    let l = reorder_from_ui(&layout(&["a", "b", "c", "d"]), 3, 2);
    assert_eq!(l.ids(), ["b", "a", "c", "d"]);
}

#[test]
fn reorder_same_row_is_identity() {
    let base = layout(&["a", "b", "c"]);
    assert_eq!(reorder_from_ui(&base, 1, 1), base);
}

#[test]
fn reorder_out_of_range_is_noop() {
    let base = layout(&["a", "b"]);
    assert_eq!(reorder_from_ui(&base, 5, 0), base);
    assert_eq!(reorder_from_ui(&base, 0, 5), base);
}

// =============================================================
// Front / back
// =============================================================

#[test]
fn bring_to_front_moves_to_top() {
    assert_eq!(bring_to_front(&layout(&["a", "b", "c"]), "a").ids(), ["b", "c", "a"]);
}

#[test]
fn send_to_back_moves_to_bottom() {
    assert_eq!(send_to_back(&layout(&["a", "b", "c"]), "c").ids(), ["c", "a", "b"]);
}
