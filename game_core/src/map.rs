use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::Vector2D;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive point containment, used for pointer hit-testing
    pub fn contains(&self, point: Vector2D) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Closest point of the rectangle to `point`, by per-axis clamping
    pub fn closest_point(&self, point: Vector2D) -> Vector2D {
        let min = DVec2::new(self.left(), self.top());
        let max = DVec2::new(self.right(), self.bottom());
        DVec2::from(point).clamp(min, max).into()
    }

    /// Check if circle intersects (or touches) the rectangle
    pub fn intersects_circle(&self, center: Vector2D, radius: f64) -> bool {
        center.distance(self.closest_point(center)) <= radius
    }
}

/// The court: horizontal walls at y = 0 and y = height, scoring
/// boundaries at x = 0 and x = width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn top(&self) -> f64 {
        0.0
    }

    pub fn bottom(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        0.0
    }

    pub fn right(&self) -> f64 {
        self.width
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of something `extent` tall so it stays on the court
    pub fn clamp_top(&self, y: f64, extent: f64) -> f64 {
        y.clamp(self.top(), (self.bottom() - extent).max(self.top()))
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}
