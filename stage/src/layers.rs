//! Layer order: the layer-list view of a layout and the moves it offers.
//!
//! The layer list shows the top of the stack first, the reverse of paint
//! order. Every UI index is converted back to a paint-order index before the
//! layout is touched. None of these operations change the selection.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ElementId, Layout};

/// One step up (toward the top of the stack) or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// A row of the layer list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerEntry {
    pub id: ElementId,
    pub name: String,
    pub kind: &'static str,
    pub locked: bool,
    pub hidden: bool,
}

/// Rows of the layer list, topmost element first.
#[must_use]
pub fn layer_list(layout: &Layout) -> Vec<LayerEntry> {
    layout
        .elements()
        .rev()
        .map(|el| LayerEntry {
            id: el.id.clone(),
            name: el.name.clone(),
            kind: el.kind.name(),
            locked: el.locked,
            hidden: el.hidden,
        })
        .collect()
}

/// Paint-order index for layer-list row `ui_index`.
#[must_use]
pub fn ui_to_paint_index(len: usize, ui_index: usize) -> Option<usize> {
    (ui_index < len).then(|| len - 1 - ui_index)
}

/// Layer-list row for paint-order index `paint_index`.
#[must_use]
pub fn paint_to_ui_index(len: usize, paint_index: usize) -> Option<usize> {
    ui_to_paint_index(len, paint_index)
}

/// Swap `id` with its neighbour in paint order. No-op at either end of the
/// stack or for an unknown id.
#[must_use]
pub fn move_element(layout: &Layout, id: &str, direction: Direction) -> Layout {
    let Some(index) = layout.index_of(id) else {
        return layout.clone();
    };
    let neighbour = match direction {
        Direction::Up => index + 1,
        Direction::Down => match index.checked_sub(1) {
            Some(i) => i,
            None => return layout.clone(),
        },
    };
    if neighbour >= layout.len() {
        return layout.clone();
    }
    layout.swap(index, neighbour)
}

/// Drag-to-reorder in the layer list: move the row at `from_ui` so it ends
/// up at row `to_ui`. Out-of-range rows are a no-op.
#[must_use]
pub fn reorder_from_ui(layout: &Layout, from_ui: usize, to_ui: usize) -> Layout {
    let len = layout.len();
    let (Some(from), Some(to)) = (ui_to_paint_index(len, from_ui), ui_to_paint_index(len, to_ui)) else {
        return layout.clone();
    };
    let Some(id) = layout.elements().nth(from).map(|el| el.id.clone()) else {
        return layout.clone();
    };
    layout.move_to_index(&id, to)
}

/// Move `id` to the top of the stack.
#[must_use]
pub fn bring_to_front(layout: &Layout, id: &str) -> Layout {
    layout.move_to_index(id, layout.len())
}

/// Move `id` to the bottom of the stack.
#[must_use]
pub fn send_to_back(layout: &Layout, id: &str) -> Layout {
    layout.move_to_index(id, 0)
}
