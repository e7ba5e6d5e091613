//! Alignment and even distribution of the selection.
//!
//! Both operations read the current layout and selection and return a new
//! layout. Selected ids missing from the layout are ignored. Insufficient
//! selection counts are silent no-ops.

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Element, ElementId, Layout};
use crate::geometry::{Axis, Rect};
use crate::selection::Selection;

/// Which edge or center line to align to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl AlignMode {
    /// The axis along which elements move.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Center | Self::Right => Axis::X,
            Self::Top | Self::Middle | Self::Bottom => Axis::Y,
        }
    }
}

/// What the selection is aligned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignTarget {
    /// The bounding box of the selection itself. Needs two or more elements.
    #[default]
    Selection,
    /// The stage bounds; each element is aligned independently.
    Stage,
}

fn selected<'a>(layout: &'a Layout, selection: &Selection) -> Vec<&'a Element> {
    selection.ids().iter().filter_map(|id| layout.get(id)).collect()
}

/// Align the selected elements.
#[must_use]
pub fn align(layout: &Layout, selection: &Selection, mode: AlignMode, target: AlignTarget) -> Layout {
    let members = selected(layout, selection);
    let bounds = match target {
        AlignTarget::Selection => {
            if members.len() < 2 {
                return layout.clone();
            }
            match Rect::union_all(members.iter().map(|el| el.rect())) {
                Some(r) => r,
                None => return layout.clone(),
            }
        }
        AlignTarget::Stage => {
            let (w, h) = layout.stage_size();
            Rect::new(0.0, 0.0, w, h)
        }
    };

    let positions: Vec<(ElementId, f64, f64)> = members
        .iter()
        .map(|el| {
            let g = &el.geometry;
            let (mut x, mut y) = (g.x, g.y);
            match mode {
                AlignMode::Left => x = bounds.x,
                AlignMode::Center => x = (bounds.x + bounds.right()) / 2.0 - g.width / 2.0,
                AlignMode::Right => x = bounds.right() - g.width,
                AlignMode::Top => y = bounds.y,
                AlignMode::Middle => y = (bounds.y + bounds.bottom()) / 2.0 - g.height / 2.0,
                AlignMode::Bottom => y = bounds.bottom() - g.height,
            }
            (el.id.clone(), x, y)
        })
        .collect();
    layout.set_positions(&positions)
}

/// Space the selected elements evenly along `axis`.
///
/// Elements are sorted by their coordinate on the axis; the first and last
/// keep their positions and the rest are placed at equal intervals between
/// them. Needs three or more elements.
#[must_use]
pub fn distribute(layout: &Layout, selection: &Selection, axis: Axis) -> Layout {
    let mut members = selected(layout, selection);
    if members.len() < 3 {
        return layout.clone();
    }
    let coord = |el: &Element| match axis {
        Axis::X => el.geometry.x,
        Axis::Y => el.geometry.y,
    };
    members.sort_by(|a, b| coord(a).total_cmp(&coord(b)));

    let first = coord(members[0]);
    let last = coord(members[members.len() - 1]);
    #[allow(clippy::cast_precision_loss)]
    let step = (last - first) / (members.len() - 1) as f64;

    let inner = &members[1..members.len() - 1];
    let positions: Vec<(ElementId, f64, f64)> = inner
        .iter()
        .enumerate()
        .map(|(i, el)| {
            #[allow(clippy::cast_precision_loss)]
            let at = first + step * (i + 1) as f64;
            let (x, y) = match axis {
                Axis::X => (at, el.geometry.y),
                Axis::Y => (el.geometry.x, at),
            };
            (el.id.clone(), x, y)
        })
        .collect();
    layout.set_positions(&positions)
}
