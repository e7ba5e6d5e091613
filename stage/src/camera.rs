#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in either viewport (screen) or stage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Mapping between the on-screen canvas and the fixed-resolution stage.
///
/// `origin_x` / `origin_y` locate the stage's top-left corner in viewport
/// pixels. `scale` is viewport pixels per stage pixel (0.5 = stage drawn at
/// half size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, scale: 1.0 }
    }
}

impl Camera {
    /// Camera with the stage origin at the viewport origin and the given scale.
    #[must_use]
    pub fn with_scale(scale: f64) -> Self {
        Self { scale, ..Self::default() }
    }

    /// Scale that fits a stage of `stage_width` into a container `container_width` wide.
    ///
    /// Returns 1.0 when the stage width is not positive.
    #[must_use]
    pub fn fit_scale(container_width: f64, stage_width: f64) -> f64 {
        if stage_width <= 0.0 { 1.0 } else { container_width / stage_width }
    }

    /// Convert a viewport point to stage coordinates.
    #[must_use]
    pub fn screen_to_stage(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.origin_x) / self.scale,
            y: (screen.y - self.origin_y) / self.scale,
        }
    }

    /// Convert a stage point to viewport coordinates.
    #[must_use]
    pub fn stage_to_screen(&self, stage: Point) -> Point {
        Point {
            x: stage.x * self.scale + self.origin_x,
            y: stage.y * self.scale + self.origin_y,
        }
    }

    /// Convert a viewport distance (pixels) to a stage distance.
    #[must_use]
    pub fn screen_dist_to_stage(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }
}
