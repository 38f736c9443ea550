//! Circle-proxy collision detection and impulse response
//!
//! Bodies collide through their equal-area circles. Detection produces a
//! contact (depth + normal), the caller separates the pair positionally, and
//! `solve_collision` then applies a single restitution impulse along the
//! normal. No rotation, friction or persistent contacts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::RigidBody;

/// Broad-phase collision proxy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Result of an overlapping circle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Overlap along the normal (for position correction)
    pub depth: f32,
    /// Unit normal pointing from A toward B
    pub normal: Vec2,
}

/// Overlap test; touching circles count as intersecting
pub fn intersect_circles(a: &Circle, b: &Circle) -> bool {
    let dist_sq = a.center.distance_squared(b.center);
    let radii = a.radius + b.radius;
    dist_sq <= radii * radii
}

/// Overlap test with penetration depth and contact normal.
///
/// Coincident centers have no defined direction; the normal falls back to
/// `(1, 0)` with depth equal to the sum of the radii.
pub fn intersect_circles_contact(a: &Circle, b: &Circle) -> Option<Contact> {
    let delta = b.center - a.center;
    let dist_sq = delta.length_squared();
    let radii = a.radius + b.radius;

    if dist_sq > radii * radii {
        return None;
    }

    let dist = dist_sq.sqrt();
    if dist != 0.0 {
        Some(Contact {
            depth: radii - dist,
            normal: delta / dist,
        })
    } else {
        Some(Contact {
            depth: radii,
            normal: Vec2::X,
        })
    }
}

/// Push an overlapping pair apart along the normal, half the depth each
pub fn separate(a: &mut RigidBody, b: &mut RigidBody, contact: &Contact) {
    let half = contact.normal * (contact.depth / 2.0);
    a.move_by(-half);
    b.move_by(half);
}

/// Apply a restitution impulse along `normal` (pointing from A to B).
///
/// Separating pairs are left alone. Pairs where both bodies are immovable
/// have no finite impulse and are also left alone.
pub fn solve_collision(a: &mut RigidBody, b: &mut RigidBody, normal: Vec2) {
    let relative = b.velocity - a.velocity;
    let along_normal = relative.dot(normal);

    if along_normal > 0.0 {
        return;
    }

    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum == 0.0 {
        return;
    }

    let e = a.restitution().min(b.restitution());
    let j = -(1.0 + e) * along_normal / inv_mass_sum;

    a.velocity -= a.inv_mass() * j * normal;
    b.velocity += b.inv_mass() * j * normal;
}
