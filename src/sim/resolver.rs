//! Game rules applied on top of raw contacts
//!
//! Contacts are resolved when the bodies separate, so a ball resting against a
//! surface for several steps is only handled once.

use glam::Vec2;

use super::body::{BlockId, BodyKind};
use super::world::ContactPair;
use crate::consts::{HIGH_SPEED_DAMPING, MAX_BALL_SPEED, MIN_AXIS_SPEED};

/// What the game scene should do about a finished contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Ball reached the back wall: restart the round
    Missed,
    /// Ball left the paddle or the frame: keep it moving
    Deflected,
    /// Ball left a block: keep it moving and break the block
    BlockHit(BlockId),
}

/// Decide how a contact-end between two bodies is handled
///
/// Returns `None` for pairs that do not involve the ball.
pub fn resolve_contact_end(pair: ContactPair) -> Option<ContactOutcome> {
    let outcome = match pair.other_than_ball()? {
        BodyKind::BackWall => ContactOutcome::Missed,
        BodyKind::Block(id) => ContactOutcome::BlockHit(id),
        BodyKind::Paddle | BodyKind::Boundary => ContactOutcome::Deflected,
        BodyKind::Ball => return None,
    };
    Some(outcome)
}

/// Linear damping for the ball at the given speed
#[inline]
pub fn damping_for_speed(speed: f32) -> f32 {
    if speed > MAX_BALL_SPEED {
        HIGH_SPEED_DAMPING
    } else {
        0.0
    }
}

/// Push an axis speed out of the dead zone around zero
#[inline]
pub fn clamp_dead_zone(v: f32) -> f32 {
    if v > -MIN_AXIS_SPEED && v <= 0.0 {
        -MIN_AXIS_SPEED - 1.0
    } else if v > 0.0 && v < MIN_AXIS_SPEED {
        MIN_AXIS_SPEED + 1.0
    } else {
        v
    }
}

/// Apply `clamp_dead_zone` to both axes
#[inline]
pub fn clamp_velocity(vel: Vec2) -> Vec2 {
    Vec2::new(clamp_dead_zone(vel.x), clamp_dead_zone(vel.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_contact_outcomes() {
        let ball = BodyKind::Ball;
        assert_eq!(
            resolve_contact_end(ContactPair::new(ball, BodyKind::BackWall)),
            Some(ContactOutcome::Missed)
        );
        assert_eq!(
            resolve_contact_end(ContactPair::new(BodyKind::Block(7), ball)),
            Some(ContactOutcome::BlockHit(7))
        );
        assert_eq!(
            resolve_contact_end(ContactPair::new(BodyKind::Paddle, ball)),
            Some(ContactOutcome::Deflected)
        );
        assert_eq!(
            resolve_contact_end(ContactPair::new(ball, BodyKind::Boundary)),
            Some(ContactOutcome::Deflected)
        );
        assert_eq!(
            resolve_contact_end(ContactPair::new(BodyKind::Paddle, BodyKind::Block(1))),
            None
        );
    }

    #[test]
    fn test_dead_zone_edges() {
        assert_eq!(clamp_dead_zone(0.0), -21.0);
        assert_eq!(clamp_dead_zone(-19.9), -21.0);
        assert_eq!(clamp_dead_zone(-20.0), -20.0);
        assert_eq!(clamp_dead_zone(0.1), 21.0);
        assert_eq!(clamp_dead_zone(19.99), 21.0);
        assert_eq!(clamp_dead_zone(20.0), 20.0);
        assert_eq!(clamp_velocity(Vec2::new(5.0, -300.0)), Vec2::new(21.0, -300.0));
    }

    #[test]
    fn test_damping_threshold() {
        assert_eq!(damping_for_speed(600.0), 0.0);
        assert_eq!(damping_for_speed(600.5), 0.4);
        assert_eq!(damping_for_speed(0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_damping_is_a_step_at_max_speed(speed in 0.0f32..2000.0) {
            let damping = damping_for_speed(speed);
            if speed > MAX_BALL_SPEED {
                prop_assert_eq!(damping, HIGH_SPEED_DAMPING);
            } else {
                prop_assert_eq!(damping, 0.0);
            }
        }

        #[test]
        fn prop_dead_zone_pushes_out(v in -20.0f32..20.0) {
            prop_assume!(v > -20.0);
            let clamped = clamp_dead_zone(v);
            prop_assert!(clamped.abs() >= 21.0);
            if v <= 0.0 {
                prop_assert_eq!(clamped, -21.0);
            } else {
                prop_assert_eq!(clamped, 21.0);
            }
        }

        #[test]
        fn prop_dead_zone_leaves_fast_axes(v in prop_oneof![-1000.0f32..=-20.0, 20.0f32..1000.0]) {
            prop_assert_eq!(clamp_dead_zone(v), v);
        }
    }
}
