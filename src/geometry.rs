//! Points, rectangles and viewport scaling (canvas space, y grows downward).

use crate::config::{BASE_HEIGHT, BASE_WIDTH};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `min` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Vec2::new(x0.min(x1), y0.min(y1)),
            max: Vec2::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Rectangle of half-extents `(hw, hh)` around `center`.
    pub fn centered(center: Vec2, hw: f64, hh: f64) -> Self {
        Self::new(center.x - hw, center.y - hh, center.x + hw, center.y + hh)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }

    /// Inclusive on the min edge, exclusive on the max edge.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

/// Current drawing surface size. Layout constants are authored against a
/// 1024x768 surface and scaled per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: BASE_WIDTH,
            height: BASE_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale a horizontal base-unit length.
    pub fn sx(&self, v: f64) -> f64 {
        v * self.width / BASE_WIDTH
    }

    /// Scale a vertical base-unit length.
    pub fn sy(&self, v: f64) -> f64 {
        v * self.height / BASE_HEIGHT
    }

    /// Point at a fraction of the surface, e.g. `frac(0.5, 0.5)` is the centre.
    pub fn frac(&self, fx: f64, fy: f64) -> Vec2 {
        Vec2::new(self.width * fx, self.height * fy)
    }

    pub fn center(&self) -> Vec2 {
        self.frac(0.5, 0.5)
    }

    /// Font size in pixels for a base size, following the smaller axis scale so
    /// text never outgrows its buttons.
    pub fn font_px(&self, base: f64) -> f64 {
        (base * (self.width / BASE_WIDTH).min(self.height / BASE_HEIGHT)).max(1.0)
    }
}
