//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

    /// Byte stride for vertex buffer layouts
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for world elements
pub mod colors {
    pub const ASTEROID: [f32; 4] = [0.65, 0.16, 0.16, 1.0];
    pub const SHIP: [f32; 4] = [0.56, 0.93, 0.56, 1.0];
    pub const FLARE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const COLLISION_CIRCLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const COLLIDING: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        let verts = [Vertex::new(1.0, 2.0, colors::SHIP); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 48);
    }
}
