#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Point};
use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::{ElementId, Layout};
use crate::geometry::Rect;
use crate::selection::Selection;

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    pub const ALL: [ResizeAnchor; 8] = [Self::Nw, Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W];

    /// Fractional position of the handle on the bounding box, `(0..=1, 0..=1)`.
    #[must_use]
    pub fn fraction(self) -> (f64, f64) {
        match self {
            Self::Nw => (0.0, 0.0),
            Self::N => (0.5, 0.0),
            Self::Ne => (1.0, 0.0),
            Self::E => (1.0, 0.5),
            Self::Se => (1.0, 1.0),
            Self::S => (0.5, 1.0),
            Self::Sw => (0.0, 1.0),
            Self::W => (0.0, 0.5),
        }
    }

    /// Whether dragging this handle moves the left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::Nw | Self::W | Self::Sw)
    }

    /// Whether dragging this handle moves the right edge.
    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::Ne | Self::E | Self::Se)
    }

    /// Whether dragging this handle moves the top edge.
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::Nw | Self::N | Self::Ne)
    }

    /// Whether dragging this handle moves the bottom edge.
    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::Sw | Self::S | Self::Se)
    }

    /// Stage-space position of this handle on `rect`.
    #[must_use]
    pub fn point_on(self, rect: &Rect) -> Point {
        let (fx, fy) = self.fraction();
        Point::new(rect.x + rect.width * fx, rect.y + rect.height * fy)
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Test which element (if any) is under `stage_pt`.
///
/// Resize handles of a single selected element are checked first, then
/// element bodies from the top of the stack down. Hidden and locked elements
/// are transparent to the pointer, so a press falls through them to whatever
/// lies beneath. Rotation is ignored.
#[must_use]
pub fn hit_test(stage_pt: Point, layout: &Layout, camera: &Camera, selection: &Selection) -> Option<Hit> {
    if selection.len() == 1 {
        if let Some(hit) = hit_handles(stage_pt, layout, camera, selection) {
            return Some(hit);
        }
    }

    layout
        .elements()
        .rev()
        .filter(|el| el.is_interactive())
        .find(|el| el.rect().contains(stage_pt))
        .map(|el| Hit { element_id: el.id.clone(), part: HitPart::Body })
}

fn hit_handles(stage_pt: Point, layout: &Layout, camera: &Camera, selection: &Selection) -> Option<Hit> {
    let id = selection.primary()?;
    let el = layout.get(id)?;
    if !el.is_interactive() {
        return None;
    }
    let radius = camera.screen_dist_to_stage(HANDLE_RADIUS_PX);
    let rect = el.rect();
    ResizeAnchor::ALL
        .into_iter()
        .find(|anchor| {
            let p = anchor.point_on(&rect);
            (p.x - stage_pt.x).abs() <= radius && (p.y - stage_pt.y).abs() <= radius
        })
        .map(|anchor| Hit { element_id: el.id.clone(), part: HitPart::ResizeHandle(anchor) })
}
