//! Fixed timestep physics world
//!
//! Holds one dynamic ball and a handful of static bodies. Each step integrates
//! the ball, resolves overlaps and reports contacts that began or ended.

use glam::Vec2;

use super::body::{Aabb, Ball, Block, BlockId, BodyKind, Paddle};
use super::collision::{
    ball_frame_collision, ball_rect_collision, ball_segment_collision, resolve_collision,
};
use crate::color::Color;
use crate::consts::{BLOCK_HEIGHT, BLOCK_WIDTH};

/// Two bodies that touched or separated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    pub a: BodyKind,
    pub b: BodyKind,
}

impl ContactPair {
    pub fn new(a: BodyKind, b: BodyKind) -> Self {
        Self { a, b }
    }

    /// The body the ball touched, if the ball is part of this pair
    pub fn other_than_ball(&self) -> Option<BodyKind> {
        match (self.a, self.b) {
            (BodyKind::Ball, other) | (other, BodyKind::Ball) => Some(other),
            _ => None,
        }
    }
}

/// Contact notifications raised by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    Began(ContactPair),
    Ended(ContactPair),
}

/// Physics world for the game scene
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    /// Acceleration applied to the ball every step
    pub gravity: Vec2,
    size: Vec2,
    edge_loop: Option<Aabb>,
    back_wall: Option<(Vec2, Vec2)>,
    ball: Option<Ball>,
    paddle: Option<Paddle>,
    /// Live blocks (sorted by id)
    blocks: Vec<Block>,
    next_block_id: BlockId,
    /// Bodies the ball touched during the last step
    touching: Vec<BodyKind>,
}

impl PhysicsWorld {
    /// Create an empty world covering `size`, with zero gravity
    pub fn new(size: Vec2) -> Self {
        Self {
            gravity: Vec2::ZERO,
            size,
            edge_loop: None,
            back_wall: None,
            ball: None,
            paddle: None,
            blocks: Vec::new(),
            next_block_id: 1,
            touching: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Enclose the world in an edge loop along its frame
    pub fn add_edge_loop(&mut self) {
        self.edge_loop = Some(Aabb::from_corners(Vec2::ZERO, self.size));
    }

    /// Add the back wall as a segment from `a` to `b`
    pub fn add_back_wall(&mut self, a: Vec2, b: Vec2) {
        self.back_wall = Some((a, b));
    }

    pub fn back_wall(&self) -> Option<(Vec2, Vec2)> {
        self.back_wall
    }

    pub fn has_edge_loop(&self) -> bool {
        self.edge_loop.is_some()
    }

    // === Ball ===

    /// Place a new ball at rest, replacing any existing one
    pub fn spawn_ball(&mut self, pos: Vec2) {
        self.remove_ball();
        self.ball = Some(Ball::new(pos));
    }

    pub fn remove_ball(&mut self) -> Option<Ball> {
        self.forget_contact(BodyKind::Ball);
        self.ball.take()
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.ball.as_mut()
    }

    // === Paddle ===

    pub fn set_paddle(&mut self, paddle: Paddle) {
        self.paddle = Some(paddle);
    }

    pub fn paddle(&self) -> Option<&Paddle> {
        self.paddle.as_ref()
    }

    pub fn paddle_mut(&mut self) -> Option<&mut Paddle> {
        self.paddle.as_mut()
    }

    // === Blocks ===

    /// Add a block centered at the given grid cell and return its handle
    pub fn spawn_block(&mut self, column: usize, row: usize, color: Color) -> BlockId {
        let id = self.next_block_id;
        self.next_block_id += 1;
        self.blocks.push(Block {
            id,
            column,
            row,
            rect: Aabb::new(Block::grid_center(column, row), Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT)),
            color,
        });
        id
    }

    pub fn remove_block(&mut self, id: BlockId) -> Option<Block> {
        let index = self.blocks.iter().position(|b| b.id == id)?;
        self.forget_contact(BodyKind::Block(id));
        Some(self.blocks.remove(index))
    }

    pub fn remove_blocks(&mut self) {
        self.touching.retain(|kind| !matches!(kind, BodyKind::Block(_)));
        self.blocks.clear();
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Drop a body from the contact set without reporting a separation
    fn forget_contact(&mut self, kind: BodyKind) {
        if kind == BodyKind::Ball {
            self.touching.clear();
        } else {
            self.touching.retain(|k| *k != kind);
        }
    }

    /// Bodies currently in contact with the ball
    pub fn touching(&self) -> &[BodyKind] {
        &self.touching
    }

    /// Advance the world by one fixed timestep
    pub fn step(&mut self, dt: f32) -> Vec<ContactEvent> {
        let mut events = Vec::new();
        let Some(ball) = self.ball.as_mut() else {
            return events;
        };

        // Integrate
        ball.vel += self.gravity * dt;
        if ball.linear_damping > 0.0 {
            ball.vel *= 1.0 / (1.0 + dt * ball.linear_damping);
        }
        ball.pos += ball.vel * dt;

        // Collide against static bodies
        let mut touching = Vec::new();

        if let Some(paddle) = &self.paddle {
            let hit = ball_rect_collision(ball.pos, ball.radius, &paddle.rect);
            if hit.hit {
                resolve_collision(&mut ball.pos, &mut ball.vel, &hit);
                touching.push(BodyKind::Paddle);
            }
        }

        for block in &self.blocks {
            let hit = ball_rect_collision(ball.pos, ball.radius, &block.rect);
            if hit.hit {
                resolve_collision(&mut ball.pos, &mut ball.vel, &hit);
                touching.push(BodyKind::Block(block.id));
            }
        }

        if let Some((a, b)) = self.back_wall {
            let hit = ball_segment_collision(ball.pos, ball.radius, a, b);
            if hit.hit {
                resolve_collision(&mut ball.pos, &mut ball.vel, &hit);
                touching.push(BodyKind::BackWall);
            }
        }

        if let Some(frame) = &self.edge_loop {
            // Twice, for corners
            for _ in 0..2 {
                let hit = ball_frame_collision(ball.pos, ball.radius, frame);
                if !hit.hit {
                    break;
                }
                resolve_collision(&mut ball.pos, &mut ball.vel, &hit);
                if !touching.contains(&BodyKind::Boundary) {
                    touching.push(BodyKind::Boundary);
                }
            }
        }

        // Report contact changes
        for kind in &touching {
            if !self.touching.contains(kind) {
                events.push(ContactEvent::Began(ContactPair::new(BodyKind::Ball, *kind)));
            }
        }
        for kind in &self.touching {
            if !touching.contains(kind) {
                events.push(ContactEvent::Ended(ContactPair::new(*kind, BodyKind::Ball)));
            }
        }
        self.touching = touching;

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn world() -> PhysicsWorld {
        let mut world = PhysicsWorld::new(Vec2::new(320.0, 100.0));
        world.add_edge_loop();
        world
    }

    fn ended(events: &[ContactEvent]) -> Vec<BodyKind> {
        events
            .iter()
            .filter_map(|e| match e {
                ContactEvent::Ended(pair) => pair.other_than_ball(),
                ContactEvent::Began(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_other_than_ball() {
        let pair = ContactPair::new(BodyKind::Block(3), BodyKind::Ball);
        assert_eq!(pair.other_than_ball(), Some(BodyKind::Block(3)));
        let pair = ContactPair::new(BodyKind::Ball, BodyKind::BackWall);
        assert_eq!(pair.other_than_ball(), Some(BodyKind::BackWall));
        let pair = ContactPair::new(BodyKind::Paddle, BodyKind::Boundary);
        assert_eq!(pair.other_than_ball(), None);
    }

    #[test]
    fn test_ball_moves_without_gravity() {
        let mut world = world();
        world.spawn_ball(Vec2::new(100.0, 50.0));
        world.ball_mut().unwrap().vel = Vec2::new(120.0, 0.0);

        let events = world.step(0.5);
        assert!(events.is_empty());
        let ball = world.ball().unwrap();
        assert!((ball.pos - Vec2::new(160.0, 50.0)).length() < 0.001);
        assert_eq!(ball.vel, Vec2::new(120.0, 0.0));
    }

    #[test]
    fn test_damping_slows_ball() {
        let mut world = world();
        world.spawn_ball(Vec2::new(100.0, 50.0));
        let ball = world.ball_mut().unwrap();
        ball.vel = Vec2::new(700.0, 0.0);
        ball.linear_damping = 0.4;

        world.step(SIM_DT);
        let speed = world.ball().unwrap().speed();
        assert!(speed < 700.0);
        assert!((speed - 700.0 / (1.0 + SIM_DT * 0.4)).abs() < 0.01);
    }

    #[test]
    fn test_wall_bounce_reports_begin_then_end() {
        let mut world = world();
        world.spawn_ball(Vec2::new(160.0, 96.0));
        world.ball_mut().unwrap().vel = Vec2::new(0.0, 120.0);

        let events = world.step(SIM_DT);
        assert_eq!(
            events,
            vec![ContactEvent::Began(ContactPair::new(BodyKind::Ball, BodyKind::Boundary))]
        );
        let ball = world.ball().unwrap();
        assert!(ball.vel.y < 0.0, "ball should bounce off the top edge");
        assert!(ball.pos.y <= 96.001);

        let events = world.step(SIM_DT);
        assert_eq!(ended(&events), vec![BodyKind::Boundary]);
    }

    #[test]
    fn test_block_contact_and_removal() {
        let mut world = world();
        let id = world.spawn_block(0, 0, Color::BLACK);
        assert_eq!(world.block_count(), 1);

        // Ball heading left into the block's right face
        world.spawn_ball(Vec2::new(27.0, 10.0));
        world.ball_mut().unwrap().vel = Vec2::new(-240.0, 0.0);

        world.step(SIM_DT);
        assert_eq!(world.touching(), &[BodyKind::Block(id)]);
        assert!(world.ball().unwrap().vel.x > 0.0);

        let events = world.step(SIM_DT);
        assert_eq!(ended(&events), vec![BodyKind::Block(id)]);

        assert!(world.remove_block(id).is_some());
        assert!(world.remove_block(id).is_none());
        assert_eq!(world.block_count(), 0);
    }

    #[test]
    fn test_back_wall_contact() {
        let mut world = world();
        world.add_back_wall(Vec2::new(319.0, 0.0), Vec2::new(319.0, 100.0));
        world.spawn_ball(Vec2::new(314.0, 50.0));
        world.ball_mut().unwrap().vel = Vec2::new(240.0, 0.0);

        world.step(SIM_DT);
        assert!(world.touching().contains(&BodyKind::BackWall));
        world.step(SIM_DT);
        assert!(world.touching().is_empty());
    }

    #[test]
    fn test_paddle_deflects_ball() {
        let mut world = world();
        world.set_paddle(Paddle::new(Vec2::new(290.0, 50.0)));
        world.spawn_ball(Vec2::new(284.0, 50.0));
        world.ball_mut().unwrap().vel = Vec2::new(240.0, 30.0);

        world.step(SIM_DT);
        let ball = world.ball().unwrap();
        assert!(ball.vel.x < 0.0);
        assert!((ball.vel.y - 30.0).abs() < 0.001, "no friction along the face");
    }

    #[test]
    fn test_removing_ball_clears_contacts_silently() {
        let mut world = world();
        world.spawn_ball(Vec2::new(160.0, 97.0));
        world.ball_mut().unwrap().vel = Vec2::new(0.0, 60.0);
        world.step(SIM_DT);
        assert!(!world.touching().is_empty());

        world.spawn_ball(Vec2::new(160.0, 50.0));
        assert!(world.touching().is_empty());
        assert!(world.step(SIM_DT).is_empty());
    }

    #[test]
    fn test_step_without_ball_is_noop() {
        let mut world = world();
        world.spawn_block(1, 1, Color::BLACK);
        assert!(world.step(SIM_DT).is_empty());
        assert_eq!(world.block_count(), 1);
    }
}
