//! Pure geometry helpers: rectangles, grid snapping, axis locking, and
//! fit-to-stage sizing.
//!
//! Everything here works in stage space. Nothing in this module knows about
//! elements or layouts; callers pass plain numbers and rectangles.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Axis-aligned rectangle in stage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `pt` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Bounding box of every rectangle in `rects`, or `None` when empty.
    pub fn union_all<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Rect>,
    {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }
}

/// A stage axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The axis along which `(dx, dy)` moves further. Ties resolve to `Y`.
    #[must_use]
    pub fn dominant(dx: f64, dy: f64) -> Self {
        if dx.abs() > dy.abs() { Self::X } else { Self::Y }
    }

    /// Zero the component of `(dx, dy)` perpendicular to this axis.
    #[must_use]
    pub fn constrain(self, dx: f64, dy: f64) -> (f64, f64) {
        match self {
            Self::X => (dx, 0.0),
            Self::Y => (0.0, dy),
        }
    }
}

/// Round `value` to the nearest multiple of `step`. A non-positive step
/// leaves the value unchanged.
#[must_use]
pub fn snap_to_grid(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Default element size for an image of natural size `image_w` x `image_h`.
///
/// The image is scaled down to fit inside the stage, never upscaled:
/// `scale = min(stage_w / image_w, stage_h / image_h, 1)`. Degenerate image
/// sizes are returned unchanged.
#[must_use]
pub fn fit_to_stage(image_w: f64, image_h: f64, stage_w: f64, stage_h: f64) -> (f64, f64) {
    if image_w <= 0.0 || image_h <= 0.0 {
        return (image_w.max(0.0), image_h.max(0.0));
    }
    let scale = (stage_w / image_w).min(stage_h / image_h).min(1.0);
    (image_w * scale, image_h * scale)
}
