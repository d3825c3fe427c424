//! Breakout simulation module
//!
//! Physics and game rules for the refresh mini-game:
//! - Zero gravity, perfectly elastic, frictionless bodies
//! - Fixed timestep only
//! - Contacts reported on begin and end; game rules run on end
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod resolver;
pub mod world;

pub use body::{Aabb, Ball, Block, BlockId, BodyKind, Paddle};
pub use collision::{CollisionResult, ball_rect_collision, reflect_velocity};
pub use resolver::{
    ContactOutcome, clamp_dead_zone, clamp_velocity, damping_for_speed, resolve_contact_end,
};
pub use world::{ContactEvent, ContactPair, PhysicsWorld};
