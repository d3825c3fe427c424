//! Triangle lists for the few shapes the scenes use

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::color::Color;
use crate::sim::Aabb;

/// Filled axis-aligned rectangle (two triangles)
pub fn rect(min: Vec2, max: Vec2, color: Color) -> Vec<Vertex> {
    let c = color.to_array();
    vec![
        Vertex::new(min.x, min.y, c),
        Vertex::new(max.x, min.y, c),
        Vertex::new(max.x, max.y, c),
        Vertex::new(min.x, min.y, c),
        Vertex::new(max.x, max.y, c),
        Vertex::new(min.x, max.y, c),
    ]
}

pub fn aabb(bounds: &Aabb, color: Color) -> Vec<Vertex> {
    rect(bounds.min(), bounds.max(), color)
}

/// Filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let c = color.to_array();
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, c));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            c,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            c,
        ));
    }

    vertices
}

/// Two halves of the outgoing scene sliding apart vertically
///
/// `progress` runs from 0 (closed) to 1 (fully open, nothing drawn).
pub fn doors(size: Vec2, progress: f32, color: Color) -> Vec<Vertex> {
    let t = progress.clamp(0.0, 1.0);
    if t >= 1.0 {
        return Vec::new();
    }
    let half = size.y / 2.0;
    let shift = half * t;

    let mut vertices = rect(Vec2::new(0.0, half + shift), Vec2::new(size.x, size.y + shift), color);
    vertices.extend(rect(Vec2::new(0.0, -shift), Vec2::new(size.x, half - shift), color));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 5.0), Color::BLACK);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [1.0, 2.0]);
        assert_eq!(v[2].position, [3.0, 5.0]);
        assert_eq!(v[5].position, [1.0, 5.0]);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(10.0, 10.0);
        let v = circle(center, 4.0, Color::BLACK, 12);
        assert_eq!(v.len(), 36);
        for vertex in v {
            let p = Vec2::from_array(vertex.position);
            assert!(p.distance(center) <= 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_doors_open() {
        let size = Vec2::new(320.0, 100.0);
        let closed = doors(size, 0.0, Color::WHITE);
        assert_eq!(closed.len(), 12);
        assert_eq!(closed[0].position, [0.0, 50.0]);

        let half_open = doors(size, 0.5, Color::WHITE);
        assert_eq!(half_open[0].position, [0.0, 75.0]);
        assert_eq!(half_open[8].position, [320.0, 25.0]);

        assert!(doors(size, 1.0, Color::WHITE).is_empty());
    }
}
