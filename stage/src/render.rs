//! Display list: what an external renderer should draw, in order.
//!
//! This module produces plain data and never draws. The display list holds
//! visible elements bottom first with binding resolved; the overlay holds
//! the selection box, resize handles, and snap guides for the current
//! gesture. Both are expressed in stage space; the renderer applies the
//! camera.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::binding::{DataNamespace, ResolvedContent, resolve};
use crate::camera::Point;
use crate::doc::{Element, ElementId, ElementKind, Layout};
use crate::drag::SnapGuides;
use crate::geometry::Rect;
use crate::hit::ResizeAnchor;
use crate::selection::Selection;

/// One element to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub id: ElementId,
    pub kind: &'static str,
    pub rect: Rect,
    pub rotation: f64,
    /// Linear alpha in `0.0..=1.0`.
    pub alpha: f64,
    pub fill: String,
    pub border_color: String,
    pub border_width: f64,
    pub font_size: Option<f64>,
    pub content: ResolvedContent,
}

impl RenderItem {
    fn from_element(el: &Element, ns: &DataNamespace) -> Self {
        let font_size = match &el.kind {
            ElementKind::Text { font_size, .. } => Some(*font_size),
            _ => None,
        };
        Self {
            id: el.id.clone(),
            kind: el.kind.name(),
            rect: el.rect(),
            rotation: el.geometry.rotation,
            alpha: f64::from(el.geometry.opacity) / 100.0,
            fill: el.appearance.fill.clone(),
            border_color: el.appearance.border_color.clone(),
            border_width: el.appearance.border_width,
            font_size,
            content: resolve(el, ns),
        }
    }
}

/// Visible elements in paint order (bottom first). Hidden elements are omitted.
#[must_use]
pub fn display_list(layout: &Layout, ns: &DataNamespace) -> Vec<RenderItem> {
    layout
        .elements()
        .filter(|el| !el.hidden)
        .map(|el| RenderItem::from_element(el, ns))
        .collect()
}

/// Editing chrome drawn over the stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    /// Outline of each selected element.
    pub outlines: Vec<Rect>,
    /// Resize handles, present only for a single interactive selection.
    pub handles: Vec<(ResizeAnchor, Point)>,
    pub guides: SnapGuides,
}

/// Selection outlines, handles, and active guides.
#[must_use]
pub fn overlay(layout: &Layout, selection: &Selection, guides: SnapGuides) -> Overlay {
    let outlines: Vec<Rect> = selection.ids().iter().filter_map(|id| layout.get(id)).map(Element::rect).collect();
    let handles = match selection.primary().and_then(|id| layout.get(id)) {
        Some(el) if selection.len() == 1 && el.is_interactive() => {
            let r = el.rect();
            ResizeAnchor::ALL.into_iter().map(|a| (a, a.point_on(&r))).collect()
        }
        _ => Vec::new(),
    };
    Overlay { outlines, handles, guides }
}
