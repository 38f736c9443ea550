//! Rectangular world bounds with toroidal wrap-around

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned world rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: Vec2,
    pub max: Vec2,
}

impl Extent {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size centered on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) * 0.5;
        Self {
            min: -half,
            max: half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Both corners scaled about the origin
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Re-enter from the opposite side when a point has left the rectangle.
    ///
    /// Shifts by one width/height at most, so anything further out than one
    /// extent stays outside until later ticks bring it back.
    pub fn wrap(&self, mut position: Vec2) -> Vec2 {
        let width = self.width();
        let height = self.height();

        if position.x < self.min.x {
            position.x += width;
        }
        if position.x > self.max.x {
            position.x -= width;
        }
        if position.y < self.min.y {
            position.y += height;
        }
        if position.y > self.max.y {
            position.y -= height;
        }
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let e = Extent::centered(200.0, 100.0);
        assert_eq!(e.min, Vec2::new(-100.0, -50.0));
        assert_eq!(e.max, Vec2::new(100.0, 50.0));
        assert_eq!(e.width(), 200.0);
        assert_eq!(e.height(), 100.0);
    }

    #[test]
    fn test_wrap_each_side() {
        let e = Extent::centered(200.0, 100.0);
        assert_eq!(e.wrap(Vec2::new(-101.0, 0.0)), Vec2::new(99.0, 0.0));
        assert_eq!(e.wrap(Vec2::new(101.0, 0.0)), Vec2::new(-99.0, 0.0));
        assert_eq!(e.wrap(Vec2::new(0.0, -51.0)), Vec2::new(0.0, 49.0));
        assert_eq!(e.wrap(Vec2::new(0.0, 51.0)), Vec2::new(0.0, -49.0));
    }

    #[test]
    fn test_wrap_inside_and_boundary_untouched() {
        let e = Extent::centered(200.0, 100.0);
        let p = Vec2::new(12.0, -7.0);
        assert_eq!(e.wrap(p), p);
        assert_eq!(e.wrap(e.max), e.max);
        assert_eq!(e.wrap(e.min), e.min);
    }

    #[test]
    fn test_scaled() {
        let e = Extent::centered(200.0, 100.0).scaled(0.75);
        assert_eq!(e.max, Vec2::new(75.0, 37.5));
    }
}
