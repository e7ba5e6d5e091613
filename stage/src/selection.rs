//! Selection: the ordered set of selected element ids.
//!
//! The first id is the primary selection, the single target for inspector
//! edits and for snapping during a drag. Beyond primary/non-primary the order
//! carries no meaning. Selection is never persisted with the layout and holds
//! no element data, only ids; operations given unknown ids are no-ops.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::{ElementId, Layout};

/// Ordered set of selected element ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ElementId>,
}

/// Coarse shape of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Empty,
    Single,
    Multi,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding exactly `ids`, first occurrence wins on duplicates.
    #[must_use]
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ElementId>,
    {
        let mut sel = Self::new();
        for id in ids {
            sel.add(id);
        }
        sel
    }

    // --- Queries ---

    #[must_use]
    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    /// The primary (first) selected id.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn kind(&self) -> SelectionKind {
        match self.ids.len() {
            0 => SelectionKind::Empty,
            1 => SelectionKind::Single,
            _ => SelectionKind::Multi,
        }
    }

    // --- Mutations ---

    /// Replace the selection with `[id]`.
    pub fn select_only(&mut self, id: impl Into<ElementId>) {
        self.ids.clear();
        self.ids.push(id.into());
    }

    /// Append `id` unless already selected.
    pub fn add(&mut self, id: impl Into<ElementId>) {
        let id = id.into();
        if !self.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Add `id` if absent, remove it if present. Other ids keep their order.
    pub fn toggle(&mut self, id: impl Into<ElementId>) {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|s| *s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Select the contiguous paint-order slice between the primary selection
    /// and `id`, inclusive.
    ///
    /// With an empty selection this behaves like [`Selection::select_only`].
    /// Unknown ids leave the selection unchanged. The anchor stays primary.
    pub fn select_range(&mut self, layout: &Layout, id: &str) {
        let Some(to) = layout.index_of(id) else {
            return;
        };
        let Some(anchor) = self.primary().map(str::to_owned) else {
            self.select_only(id);
            return;
        };
        let Some(from) = layout.index_of(&anchor) else {
            self.select_only(id);
            return;
        };
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        let mut ids = vec![anchor.clone()];
        ids.extend(
            layout
                .elements()
                .skip(lo)
                .take(hi - lo + 1)
                .map(|el| el.id.clone())
                .filter(|el_id| *el_id != anchor),
        );
        self.ids = ids;
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer exist in `layout`. Returns true if anything was removed.
    pub fn retain_existing(&mut self, layout: &Layout) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| layout.contains(id));
        self.ids.len() != before
    }

    /// Selected ids in paint order rather than selection order.
    #[must_use]
    pub fn in_paint_order(&self, layout: &Layout) -> Vec<ElementId> {
        layout
            .elements()
            .filter(|el| self.contains(&el.id))
            .map(|el| el.id.clone())
            .collect()
    }
}
