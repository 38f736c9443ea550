//! Rigid body: polygon shape, kinematic state and mass properties

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::extent::Extent;
use super::polygon::{collision_radius, polygon_area};
use crate::consts::{MAX_DENSITY, MIN_DENSITY};
use crate::math::Transform;
use crate::wrap_angle;

/// A polygon body with circle-proxy collision.
///
/// Shape and material are fixed at construction; position, velocity and
/// orientation are advanced by the stepping loop and by collision response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    /// Local-space polygon
    vertices: Vec<Vec2>,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians in [0, 2π)
    orientation: f32,

    density: f32,
    restitution: f32,
    area: f32,
    mass: f32,
    /// 0 for immovable bodies
    inv_mass: f32,
    collision_radius: f32,
}

impl RigidBody {
    /// Create a movable body.
    ///
    /// Density is clamped to [`MIN_DENSITY`, `MAX_DENSITY`] and restitution to
    /// [0, 1]. A degenerate polygon has zero area and mass, which makes the
    /// body immovable.
    pub fn new(vertices: Vec<Vec2>, position: Vec2, density: f32, restitution: f32) -> Self {
        let area = polygon_area(&vertices);
        let radius = collision_radius(&vertices);
        let density = density.clamp(MIN_DENSITY, MAX_DENSITY);
        let mass = area * density;
        let inv_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };

        Self {
            vertices,
            position,
            velocity: Vec2::ZERO,
            orientation: 0.0,
            density,
            restitution: restitution.clamp(0.0, 1.0),
            area,
            mass,
            inv_mass,
            collision_radius: radius,
        }
    }

    /// Create a body that collides but is never moved by impulses
    pub fn new_static(vertices: Vec<Vec2>, position: Vec2, density: f32, restitution: f32) -> Self {
        let mut body = Self::new(vertices, position, density, restitution);
        body.inv_mass = 0.0;
        body
    }

    /// Builder-style initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    pub fn collision_radius(&self) -> f32 {
        self.collision_radius
    }

    /// Immovable bodies ignore impulses
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Translate without touching velocity
    pub fn move_by(&mut self, amount: Vec2) {
        self.position += amount;
    }

    /// Spin by `amount` radians, keeping orientation in [0, 2π)
    pub fn rotate(&mut self, amount: f32) {
        self.orientation = wrap_angle(self.orientation + amount);
    }

    /// Unit vector along the body's local +x axis
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.orientation.cos(), self.orientation.sin())
    }

    /// Explicit Euler step followed by a toroidal wrap into `extent`
    pub fn integrate(&mut self, dt: f32, extent: &Extent) {
        self.position += self.velocity * dt;
        self.position = extent.wrap(self.position);
    }

    /// Broad-phase proxy at the current position
    pub fn collision_circle(&self) -> Circle {
        Circle::new(self.position, self.collision_radius)
    }

    /// Local-to-world transform for rendering
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.orientation, 1.0)
    }
}
