//! Indexed triangle batches for 2D primitives
//!
//! A `DrawBatch` is the hand-off to an external renderer: one vertex buffer
//! and one index buffer, both ready for `bytemuck::cast_slice`.

use glam::Vec2;

use super::vertex::Vertex;
use crate::math::Transform;

const MIN_CIRCLE_SEGMENTS: u32 = 3;
const MAX_CIRCLE_SEGMENTS: u32 = 256;

/// Accumulated world-space triangles for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawBatch {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    shape_count: usize,
}

impl DrawBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for the next frame, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.shape_count = 0;
    }

    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Filled polygon from local-space points and triangle indices into them
    pub fn push_polygon(
        &mut self,
        points: &[Vec2],
        triangles: &[usize],
        transform: &Transform,
        color: [f32; 4],
    ) {
        let base = self.vertices.len() as u32;

        self.vertices.extend(points.iter().map(|p| {
            let world = transform.apply(*p);
            Vertex::new(world.x, world.y, color)
        }));
        self.indices
            .extend(triangles.iter().map(|i| base + *i as u32));

        self.shape_count += 1;
    }

    /// Circle outline as a thin ring of quads
    pub fn push_circle_outline(
        &mut self,
        center: Vec2,
        radius: f32,
        thickness: f32,
        segments: u32,
        color: [f32; 4],
    ) {
        let segments = segments.clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS);
        let inner_r = (radius - thickness / 2.0).max(0.0);
        let outer_r = radius + thickness / 2.0;
        let base = self.vertices.len() as u32;

        // Inner/outer pair per segment boundary
        for i in 0..segments {
            let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
            let dir = Vec2::new(theta.cos(), theta.sin());
            let inner = center + dir * inner_r;
            let outer = center + dir * outer_r;
            self.vertices.push(Vertex::new(inner.x, inner.y, color));
            self.vertices.push(Vertex::new(outer.x, outer.y, color));
        }

        // Two triangles per segment, wrapping to the first pair
        for i in 0..segments {
            let inner1 = base + 2 * i;
            let outer1 = inner1 + 1;
            let inner2 = base + 2 * ((i + 1) % segments);
            let outer2 = inner2 + 1;
            self.indices
                .extend_from_slice(&[inner1, outer1, inner2, inner2, outer1, outer2]);
        }

        self.shape_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::vertex::colors;

    #[test]
    fn test_push_polygon_offsets_indices() {
        let mut batch = DrawBatch::new();
        let tri = [Vec2::ZERO, Vec2::Y, Vec2::X];
        let t = Transform::new(Vec2::new(10.0, 0.0), 0.0, 1.0);

        batch.push_polygon(&tri, &[0, 1, 2], &t, colors::SHIP);
        batch.push_polygon(&tri, &[0, 1, 2], &t, colors::ASTEROID);

        assert_eq!(batch.vertices.len(), 6);
        assert_eq!(batch.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(batch.vertices[0].position, [10.0, 0.0]);
        assert_eq!(batch.vertices[3].color, colors::ASTEROID);
        assert_eq!(batch.shape_count(), 2);
        assert_eq!(batch.triangle_count(), 2);
    }

    #[test]
    fn test_circle_outline() {
        let mut batch = DrawBatch::new();
        batch.push_circle_outline(Vec2::new(5.0, 5.0), 10.0, 1.0, 32, colors::COLLISION_CIRCLE);

        assert_eq!(batch.vertices.len(), 64);
        assert_eq!(batch.indices.len(), 32 * 6);
        assert!(batch.indices.iter().all(|i| (*i as usize) < batch.vertices.len()));

        for pair in batch.vertices.chunks(2) {
            let inner = Vec2::from(pair[0].position) - Vec2::new(5.0, 5.0);
            let outer = Vec2::from(pair[1].position) - Vec2::new(5.0, 5.0);
            assert!((inner.length() - 9.5).abs() < 1e-3);
            assert!((outer.length() - 10.5).abs() < 1e-3);
        }
    }

    #[test]
    fn test_circle_segments_clamped() {
        let mut batch = DrawBatch::new();
        batch.push_circle_outline(Vec2::ZERO, 1.0, 0.1, 1, colors::COLLIDING);
        assert_eq!(batch.vertices.len(), 6);

        batch.clear();
        assert!(batch.vertices.is_empty() && batch.indices.is_empty());
        assert_eq!(batch.shape_count(), 0);
    }
}
