//! Physics bodies and their roles
//!
//! Every body carries a `BodyKind`; contact handling matches on kinds instead
//! of looking nodes up by name.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;

/// Stable handle for a block, unique within one physics world
pub type BlockId = u32;

/// Role of a physics body in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Ball,
    Paddle,
    Block(BlockId),
    /// Edge behind the paddle; touching it means the ball was missed
    BackWall,
    /// Edge loop around the scene frame
    Boundary,
}

/// Axis-aligned rectangle given by center and half size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size / 2.0,
        }
    }

    /// Rectangle spanning `min..max`
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self {
            center: (min + max) / 2.0,
            half_extents: (max - min) / 2.0,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Closest point inside the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

/// The ball, the only dynamic body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Linear damping coefficient (velocity loss per second, Box2D style)
    pub linear_damping: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            mass: BALL_MASS,
            linear_damping: 0.0,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Instantly change momentum by `impulse`
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse / self.mass;
    }
}

/// The paddle: static for the solver, positioned from outside
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Aabb,
}

impl Paddle {
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Aabb::new(center, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.center.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.rect.center.y = y;
    }
}

/// A breakable block in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub column: usize,
    pub row: usize,
    pub rect: Aabb,
    pub color: Color,
}

impl Block {
    /// Center of the block at the given grid cell
    pub fn grid_center(column: usize, row: usize) -> Vec2 {
        BLOCK_ORIGIN + BLOCK_SPACING * Vec2::new(column as f32, row as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_corners() {
        let rect = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0));
        assert_eq!(rect.min(), Vec2::new(8.0, 16.0));
        assert_eq!(rect.max(), Vec2::new(12.0, 24.0));
        assert_eq!(Aabb::from_corners(rect.min(), rect.max()), rect);
        assert!(rect.contains(Vec2::new(9.0, 23.0)));
        assert!(!rect.contains(Vec2::new(13.0, 20.0)));
        assert_eq!(rect.closest_point(Vec2::new(0.0, 20.0)), Vec2::new(8.0, 20.0));
    }

    #[test]
    fn test_impulse_scales_by_mass() {
        let mut ball = Ball::new(Vec2::ZERO);
        ball.apply_impulse(START_IMPULSE);
        assert!((ball.vel - START_IMPULSE / BALL_MASS).length() < 0.001);
        // Impulses accumulate
        ball.apply_impulse(START_IMPULSE);
        assert!((ball.vel - 2.0 * START_IMPULSE / BALL_MASS).length() < 0.01);
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(Block::grid_center(0, 0), Vec2::new(20.0, 10.0));
        assert_eq!(Block::grid_center(2, 4), Vec2::new(32.0, 90.0));
    }

    #[test]
    fn test_paddle_moves_vertically_only() {
        let mut paddle = Paddle::new(Vec2::new(290.0, 50.0));
        paddle.set_y(12.5);
        assert_eq!(paddle.rect.center, Vec2::new(290.0, 12.5));
        assert_eq!(paddle.rect.size(), Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
    }
}
