//! Ear-clipping triangulation of simple polygons
//!
//! Output is a flat list of index triples into the input vertex slice, ready
//! to be paired with the same vertices for rendering.
//!
//! Ears are searched from the front of the remaining ring and the ring
//! restarts from its front after every clip, so the triangle order is fully
//! determined by the input. The ring is a circular doubly-linked list over
//! the input indices, making each clip O(1).

use glam::Vec2;

use super::polygon::{is_point_in_triangle, signed_area};
use crate::consts::MAX_TRIANGULATE_VERTICES;
use crate::error::{PhysicsError, Result};
use crate::math::{cross, wrap_index};

/// Circular doubly-linked ring of polygon indices
struct Ring {
    /// Polygon index stored at each ring slot
    order: Vec<usize>,
    prev: Vec<usize>,
    next: Vec<usize>,
    head: usize,
    len: usize,
}

impl Ring {
    fn new(order: Vec<usize>) -> Self {
        let n = order.len();
        let prev = (0..n).map(|i| wrap_index(i as isize - 1, n)).collect();
        let next = (0..n).map(|i| wrap_index(i as isize + 1, n)).collect();
        Self {
            order,
            prev,
            next,
            head: 0,
            len: n,
        }
    }

    fn unlink(&mut self, slot: usize) {
        let prev = self.prev[slot];
        let next = self.next[slot];
        self.next[prev] = next;
        self.prev[next] = prev;
        if slot == self.head {
            self.head = next;
        }
        self.len -= 1;
    }
}

/// Triangulate a simple polygon by ear clipping.
///
/// Returns `3 * (n - 2)` indices into `vertices`. Either winding is
/// accepted; every emitted triangle is clockwise (y up). Fails if the
/// polygon has fewer than 3 or more than [`MAX_TRIANGULATE_VERTICES`]
/// vertices, if the signed area is zero, or if a full pass over the remaining
/// ring finds no ear. Self-intersecting input is not detected as such and may
/// still produce triangles.
pub fn triangulate(vertices: &[Vec2]) -> Result<Vec<usize>> {
    let n = vertices.len();
    if n < 3 {
        return Err(PhysicsError::TooFewVertices { count: n });
    }
    if n > MAX_TRIANGULATE_VERTICES {
        return Err(PhysicsError::TooManyVertices {
            count: n,
            max: MAX_TRIANGULATE_VERTICES,
        });
    }

    // Ear test expects clockwise order; walk counter-clockwise input backwards
    let winding = signed_area(vertices);
    let order: Vec<usize> = if winding > 0.0 {
        (0..n).collect()
    } else if winding < 0.0 {
        (0..n).rev().collect()
    } else {
        return Err(PhysicsError::NonSimplePolygon { remaining: n });
    };

    let mut ring = Ring::new(order);
    let mut indices = Vec::with_capacity(3 * (n - 2));

    while ring.len > 3 {
        let mut slot = ring.head;
        let mut clipped = false;

        for _ in 0..ring.len {
            let a = ring.order[slot];
            let b = ring.order[ring.prev[slot]];
            let c = ring.order[ring.next[slot]];

            if is_ear(vertices, a, b, c) {
                indices.extend_from_slice(&[b, a, c]);
                ring.unlink(slot);
                clipped = true;
                break;
            }

            slot = ring.next[slot];
        }

        if !clipped {
            log::debug!("ear clipping stalled with {} of {} vertices left", ring.len, n);
            return Err(PhysicsError::NonSimplePolygon { remaining: ring.len });
        }
    }

    let first = ring.head;
    let second = ring.next[first];
    let third = ring.next[second];
    indices.extend_from_slice(&[ring.order[first], ring.order[second], ring.order[third]]);

    Ok(indices)
}

/// Whether `a` (between `b` and `c`) can be clipped
fn is_ear(vertices: &[Vec2], a: usize, b: usize, c: usize) -> bool {
    let va = vertices[a];
    let vb = vertices[b];
    let vc = vertices[c];

    // Reflex vertex
    if cross(vb - va, vc - va) < 0.0 {
        return false;
    }

    !vertices
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != a && *i != b && *i != c)
        .any(|(_, p)| is_point_in_triangle(*p, vb, va, vc))
}
