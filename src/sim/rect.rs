//! Axis-aligned rectangle geometry for the floor and bricks
//!
//! Containment is strict on every edge: a point lying exactly on a border is
//! outside. Collision contracts depend on this.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner (y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if `x` lies strictly between the left and right edges
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        self.x < x && x < self.right()
    }

    /// Check if `y` lies strictly between the top and bottom edges
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        self.y < y && y < self.bottom()
    }

    /// Check if a point is strictly inside the rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.spans_x(point.x) && self.spans_y(point.y)
    }

    /// Center point (for rendering or debugging)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
