//! Collision detection and response for the ball
//!
//! The ball is a circle; everything it can hit is a rectangle (paddle, blocks),
//! a line segment (back wall) or the inside of the scene frame.

use glam::Vec2;

use super::body::Aabb;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Collision point (if hit)
    pub point: Vec2,
    /// Surface normal at collision (pointing toward ball center, for reflection)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between a ball and a solid rectangle
///
/// If the ball center ended up inside the rectangle the normal points out of
/// the nearest face.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Aabb) -> CollisionResult {
    let closest = rect.closest_point(ball_pos);
    let offset = ball_pos - closest;
    let dist_sq = offset.length_squared();

    if dist_sq > 0.0 {
        if dist_sq >= ball_radius * ball_radius {
            return CollisionResult::miss();
        }
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            point: closest,
            normal: offset / dist,
            penetration: ball_radius - dist,
        };
    }

    // Center inside: push out through the face with the least overlap
    let min = rect.min();
    let max = rect.max();
    let faces = [
        (ball_pos.x - min.x, Vec2::NEG_X),
        (max.x - ball_pos.x, Vec2::X),
        (ball_pos.y - min.y, Vec2::NEG_Y),
        (max.y - ball_pos.y, Vec2::Y),
    ];
    let (depth, normal) = faces
        .into_iter()
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or((0.0, Vec2::Y));

    CollisionResult {
        hit: true,
        point: ball_pos + normal * depth,
        normal,
        penetration: depth + ball_radius,
    }
}

/// Check collision between a ball and a line segment from `a` to `b`
///
/// Segments are two-sided; when the ball center lies on the segment the
/// left-hand perpendicular of `a -> b` is used as the normal.
pub fn ball_segment_collision(ball_pos: Vec2, ball_radius: f32, a: Vec2, b: Vec2) -> CollisionResult {
    let line_vec = b - a;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq < 0.0001 {
        return CollisionResult::miss(); // Degenerate segment
    }

    let t = ((ball_pos - a).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let closest = a + line_vec * t;
    let offset = ball_pos - closest;
    let dist = offset.length();

    if dist >= ball_radius {
        return CollisionResult::miss();
    }

    let normal = if dist > 0.0001 {
        offset / dist
    } else {
        Vec2::new(-line_vec.y, line_vec.x).normalize()
    };

    CollisionResult {
        hit: true,
        point: closest,
        normal,
        penetration: ball_radius - dist,
    }
}

/// Check collision with the inside of a frame (edge loop)
///
/// Reports the single deepest face; call again after resolving to catch the
/// second face in a corner.
pub fn ball_frame_collision(ball_pos: Vec2, ball_radius: f32, frame: &Aabb) -> CollisionResult {
    let min = frame.min();
    let max = frame.max();
    let faces = [
        (min.x - (ball_pos.x - ball_radius), Vec2::X, Vec2::new(min.x, ball_pos.y)),
        ((ball_pos.x + ball_radius) - max.x, Vec2::NEG_X, Vec2::new(max.x, ball_pos.y)),
        (min.y - (ball_pos.y - ball_radius), Vec2::Y, Vec2::new(ball_pos.x, min.y)),
        ((ball_pos.y + ball_radius) - max.y, Vec2::NEG_Y, Vec2::new(ball_pos.x, max.y)),
    ];

    faces
        .into_iter()
        .filter(|(depth, _, _)| *depth > 0.0)
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(penetration, normal, point)| CollisionResult {
            hit: true,
            point,
            normal,
            penetration,
        })
        .unwrap_or_else(CollisionResult::miss)
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Push the ball out of a surface and bounce it (restitution 1, no friction)
///
/// Velocity is only reflected when moving into the surface, so a ball that is
/// already separating keeps its direction.
pub fn resolve_collision(pos: &mut Vec2, vel: &mut Vec2, hit: &CollisionResult) {
    *pos += hit.normal * hit.penetration;
    if vel.dot(hit.normal) < 0.0 {
        *vel = reflect_velocity(*vel, hit.normal);
    }
}
