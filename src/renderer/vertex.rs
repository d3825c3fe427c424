//! Vertex type handed to the host renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::color::Color;

/// 2D vertex in scene coordinates (origin bottom left, y up)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: Color) -> Self {
        Self::new(p.x, p.y, color.to_array())
    }

    /// Byte stride for a vertex buffer of this type
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex slice as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        let vertices = [Vertex::at(Vec2::new(1.0, 2.0), Color::WHITE); 3];
        assert_eq!(as_bytes(&vertices).len(), 72);
    }
}
