//! Traversable world rectangle.
//!
//! Starts at the level-authored extents and only ever grows: the only
//! mutator, [`WorldBounds::include`], takes the union with another
//! rectangle.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl WorldBounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Grow to cover the box `min..max`. Never moves an edge inward.
    /// Returns whether anything changed.
    pub fn include(&mut self, min: Vec2, max: Vec2) -> bool {
        let before = *self;
        self.min_x = self.min_x.min(min.x);
        self.min_y = self.min_y.min(min.y);
        self.max_x = self.max_x.max(max.x);
        self.max_y = self.max_y.max(max.y);
        *self != before
    }

    pub fn contains(&self, other: &WorldBounds) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// Offset that moves the box `min..max` back inside the bounds.
    /// Boxes larger than the bounds are aligned to the min edge.
    pub fn clamp_offset(&self, min: Vec2, max: Vec2) -> Vec2 {
        let mut d = Vec2::ZERO;
        if max.x > self.max_x {
            d.x = self.max_x - max.x;
        }
        if min.x + d.x < self.min_x {
            d.x = self.min_x - min.x;
        }
        if max.y > self.max_y {
            d.y = self.max_y - max.y;
        }
        if min.y + d.y < self.min_y {
            d.y = self.min_y - min.y;
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_only_grows() {
        let mut b = WorldBounds::new(0.0, 0.0, 1600.0, 400.0);
        let old = b;
        assert!(!b.include(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0)));
        assert_eq!(b, old);

        assert!(b.include(Vec2::new(1840.0, 0.0), Vec2::new(1860.0, 400.0)));
        assert_eq!(b.max_x, 1860.0);
        assert_eq!(b.min_x, 0.0);
        assert!(b.contains(&old));
    }

    #[test]
    fn clamp_pushes_box_back_inside() {
        let b = WorldBounds::new(0.0, 0.0, 100.0, 100.0);
        let d = b.clamp_offset(Vec2::new(90.0, -5.0), Vec2::new(110.0, 15.0));
        assert_eq!(d, Vec2::new(-10.0, 5.0));
        let d = b.clamp_offset(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert_eq!(d, Vec2::ZERO);
    }

    #[test]
    fn dimensions() {
        let b = WorldBounds::new(0.0, 0.0, 1600.0, 400.0);
        assert_eq!(b.width(), 1600.0);
        assert_eq!(b.height(), 400.0);
    }
}
