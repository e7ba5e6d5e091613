//! Drag and resize sessions: pointer deltas applied to element geometry.
//!
//! A `DragSession` is created on pointer-down over a selectable element and
//! snapshots the starting position of every selected, unlocked element. Each
//! move computes one stage-space delta from the anchor and applies it to every
//! snapshot, so a multi-element drag moves rigidly as a group. Snapping is
//! computed for the primary element only and the resulting correction is
//! shared by the group.
//!
//! Axis lock is resolved once per gesture from the first movement seen while
//! the lock modifier is held. It is applied only while the modifier is held,
//! but the chosen axis never changes for the rest of the gesture.
//!
//! A `ResizeSession` drags one handle of a single element; the opposite edge
//! or corner stays fixed.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{GRID_STEP, MIN_ELEMENT_SIZE, SNAP_THRESHOLD};
use crate::doc::{ElementId, Layout};
use crate::geometry::{Axis, Rect, snap_to_grid};
use crate::hit::ResizeAnchor;
use crate::input::PointerId;
use crate::selection::Selection;

/// Snapping behaviour for drag and resize gestures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    pub enabled: bool,
    /// Grid step in stage pixels.
    pub grid_step: f64,
    /// Guide capture distance in stage pixels.
    pub threshold: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self { enabled: true, grid_step: GRID_STEP, threshold: SNAP_THRESHOLD }
    }
}

impl SnapSettings {
    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

/// Which stage guide lines the primary element currently sits on.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapGuides {
    /// Vertical stage center line.
    pub center_x: bool,
    /// Horizontal stage center line.
    pub center_y: bool,
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl SnapGuides {
    #[must_use]
    pub fn any(&self) -> bool {
        self.center_x || self.center_y || self.left || self.right || self.top || self.bottom
    }
}

/// Positions produced by one drag move.
#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    /// `(id, x, y)` for every snapshotted element.
    pub positions: Vec<(ElementId, f64, f64)>,
    /// The delta actually applied, after axis lock and snapping.
    pub delta: (f64, f64),
    pub guides: SnapGuides,
}

/// One continuous move gesture over the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    /// Stage-space pointer position at gesture start.
    pub anchor: Point,
    /// Starting position of every dragged element, primary first.
    origins: Vec<(ElementId, Point)>,
    /// Size of the primary element, used for center/edge snapping.
    primary_size: (f64, f64),
    axis: Option<Axis>,
}

impl DragSession {
    /// Snapshot every selected, unlocked element.
    ///
    /// Returns `None` when nothing in the selection can move.
    #[must_use]
    pub fn start(pointer_id: PointerId, anchor: Point, layout: &Layout, selection: &Selection) -> Option<Self> {
        let mut origins = Vec::new();
        let mut primary_size = (0.0, 0.0);
        for id in selection.ids() {
            let Some(el) = layout.get(id) else {
                continue;
            };
            if el.locked {
                continue;
            }
            if origins.is_empty() {
                primary_size = (el.geometry.width, el.geometry.height);
            }
            origins.push((el.id.clone(), Point::new(el.geometry.x, el.geometry.y)));
        }
        if origins.is_empty() {
            return None;
        }
        Some(Self { pointer_id, anchor, origins, primary_size, axis: None })
    }

    /// Ids of the dragged elements, primary first.
    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.origins.iter().map(|(id, _)| id)
    }

    /// Starting position of `id`, if it is part of this gesture.
    #[must_use]
    pub fn origin_of(&self, id: &str) -> Option<Point> {
        self.origins.iter().find(|(el_id, _)| el_id == id).map(|(_, p)| *p)
    }

    /// The locked axis, once resolved.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Compute element positions for the pointer at stage point `current`.
    pub fn update(&mut self, current: Point, axis_lock: bool, snap: SnapSettings, stage: (f64, f64)) -> DragUpdate {
        let (mut dx, mut dy) = current.delta_from(self.anchor);

        let mut locked_axis = None;
        if axis_lock {
            if self.axis.is_none() && (dx != 0.0 || dy != 0.0) {
                self.axis = Some(Axis::dominant(dx, dy));
            }
            if let Some(axis) = self.axis {
                (dx, dy) = axis.constrain(dx, dy);
                locked_axis = Some(axis);
            }
        }

        let mut guides = SnapGuides::default();
        if snap.enabled {
            if let Some((_, origin)) = self.origins.first() {
                let (w, h) = self.primary_size;
                if locked_axis != Some(Axis::Y) {
                    let x = snap_axis(origin.x + dx, w, stage.0, snap);
                    dx = x - origin.x;
                    (guides.left, guides.center_x, guides.right) = guide_hits(x, w, stage.0, snap.threshold);
                }
                if locked_axis != Some(Axis::X) {
                    let y = snap_axis(origin.y + dy, h, stage.1, snap);
                    dy = y - origin.y;
                    (guides.top, guides.center_y, guides.bottom) = guide_hits(y, h, stage.1, snap.threshold);
                }
            }
        }

        let positions = self
            .origins
            .iter()
            .map(|(id, origin)| (id.clone(), origin.x + dx, origin.y + dy))
            .collect();
        DragUpdate { positions, delta: (dx, dy), guides }
    }
}

/// Snap a leading-edge coordinate: grid first, then stage guides override.
///
/// `pos` is the proposed leading edge, `size` the extent along the axis and
/// `extent` the stage length. Guide proximity is measured from the
/// grid-snapped position; the nearest guide (start edge, center, end edge)
/// strictly within the threshold wins.
fn snap_axis(pos: f64, size: f64, extent: f64, snap: SnapSettings) -> f64 {
    let grid = snap_to_grid(pos, snap.grid_step);
    let (start, center, end) = guide_distances(grid, size, extent);
    [(start, 0.0), (center, extent / 2.0 - size / 2.0), (end, extent - size)]
        .into_iter()
        .filter(|(dist, _)| *dist < snap.threshold)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map_or(grid, |(_, snapped)| snapped)
}

/// Which of (start edge, center, end edge) sit within `threshold` of their stage guide.
fn guide_hits(pos: f64, size: f64, extent: f64, threshold: f64) -> (bool, bool, bool) {
    let (start, center, end) = guide_distances(pos, size, extent);
    (start < threshold, center < threshold, end < threshold)
}

/// Distances of the start edge, center and end edge from the stage guides.
fn guide_distances(pos: f64, size: f64, extent: f64) -> (f64, f64, f64) {
    (pos.abs(), (pos + size / 2.0 - extent / 2.0).abs(), (pos + size - extent).abs())
}

/// One continuous resize gesture on a single element's handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub pointer_id: PointerId,
    pub element_id: ElementId,
    pub anchor: ResizeAnchor,
    /// Stage-space pointer position at gesture start.
    pub start: Point,
    /// Element bounds at gesture start.
    pub origin: Rect,
}

impl ResizeSession {
    /// Start resizing `element_id` from `anchor`. Returns `None` for unknown
    /// or locked elements.
    #[must_use]
    pub fn start(
        pointer_id: PointerId,
        element_id: &str,
        anchor: ResizeAnchor,
        start: Point,
        layout: &Layout,
    ) -> Option<Self> {
        let el = layout.get(element_id)?;
        if el.locked {
            return None;
        }
        Some(Self { pointer_id, element_id: el.id.clone(), anchor, start, origin: el.rect() })
    }

    /// New bounds for the pointer at stage point `current`.
    ///
    /// Moving edges follow the pointer (grid-snapped when enabled); the
    /// opposite edges stay fixed. Neither dimension drops below the minimum
    /// element size.
    #[must_use]
    pub fn update(&self, current: Point, snap: SnapSettings) -> Rect {
        let (dx, dy) = current.delta_from(self.start);
        let snap_edge = |v: f64| if snap.enabled { snap_to_grid(v, snap.grid_step) } else { v };
        let o = &self.origin;

        let mut left = o.x;
        let mut right = o.right();
        let mut top = o.y;
        let mut bottom = o.bottom();

        if self.anchor.moves_left() {
            left = snap_edge(o.x + dx).min(right - MIN_ELEMENT_SIZE);
        }
        if self.anchor.moves_right() {
            right = snap_edge(o.right() + dx).max(left + MIN_ELEMENT_SIZE);
        }
        if self.anchor.moves_top() {
            top = snap_edge(o.y + dy).min(bottom - MIN_ELEMENT_SIZE);
        }
        if self.anchor.moves_bottom() {
            bottom = snap_edge(o.bottom() + dy).max(top + MIN_ELEMENT_SIZE);
        }

        Rect::new(left, top, right - left, bottom - top)
    }
}
