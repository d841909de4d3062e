//! Axis-aligned rectangles
//!
//! Everything that collides in the world is a rectangle described by its
//! top-left corner and size (screen coordinates, y grows downward).

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * r` centered on `(cx, cy)`
    pub fn centered_square(cx: f32, cy: f32, r: f32) -> Self {
        Self {
            x: cx - r,
            y: cy - r,
            w: r * 2.0,
            h: r * 2.0,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Anything shaped like a rectangle can be collided against.
pub trait Bounds {
    fn rect(&self) -> Rect;
}

impl Bounds for Rect {
    #[inline]
    fn rect(&self) -> Rect {
        *self
    }
}

impl<T: Bounds + ?Sized> Bounds for &T {
    #[inline]
    fn rect(&self) -> Rect {
        (**self).rect()
    }
}

/// AABB overlap test.
///
/// Half-open: rectangles that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: &impl Bounds, b: &impl Bounds) -> bool {
    let a = a.rect();
    let b = b.rect();
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
