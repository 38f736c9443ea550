//! World entities: asteroids and the player ship
//!
//! An entity is a rigid body plus a kind tag carrying kind-specific state.
//! Every entity triangulates its hull once at construction so the renderer
//! never has to.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::RigidBody;
use super::extent::Extent;
use super::triangulate::triangulate;
use crate::config::{CountRange, WorldConfig};
use crate::error::{PhysicsError, Result};
use crate::math::{random_direction, random_single};

/// Arrow-shaped ship hull, nose along +x
pub const SHIP_HULL: [Vec2; 5] = [
    Vec2::new(10.0, 0.0),
    Vec2::new(-10.0, -10.0),
    Vec2::new(-5.0, -3.0),
    Vec2::new(-5.0, 3.0),
    Vec2::new(-10.0, 10.0),
];

/// Resting position of the flare tip behind the ship
pub const FLARE_TIP: Vec2 = Vec2::new(-24.0, 0.0);

/// Bounds for the flickering flare tip
const FLARE_TIP_X: (f32, f32) = (-28.0, -20.0);
const FLARE_TIP_Y: (f32, f32) = (-2.0, 2.0);

/// Ship-only state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipState {
    /// Thruster fired this tick
    pub thrusting: bool,
    /// Flare triangle in ship-local space
    pub flare: [Vec2; 3],
    /// Milliseconds since the flare tip last moved
    since_flare_ms: f32,
}

impl ShipState {
    pub fn new() -> Self {
        Self {
            thrusting: false,
            flare: [SHIP_HULL[3], SHIP_HULL[2], FLARE_TIP],
            since_flare_ms: 0.0,
        }
    }

    /// Accelerate along the ship's heading and light the thruster
    pub fn apply_thrust(&mut self, body: &mut RigidBody, amount: f32) {
        body.velocity += body.forward() * amount;
        self.thrusting = true;
    }

    pub fn disable_thrust(&mut self) {
        self.thrusting = false;
    }

    /// Move the flare tip to a random spot once per `interval_ms`.
    ///
    /// Returns whether the tip moved.
    pub fn update_flare<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        dt_ms: f32,
        interval_ms: f32,
    ) -> Result<bool> {
        self.since_flare_ms += dt_ms;
        if self.since_flare_ms < interval_ms {
            return Ok(false);
        }
        self.since_flare_ms = 0.0;

        self.flare[2] = Vec2::new(
            random_single(rng, FLARE_TIP_X.0, FLARE_TIP_X.1)?,
            random_single(rng, FLARE_TIP_Y.0, FLARE_TIP_Y.1)?,
        );
        Ok(true)
    }
}

impl Default for ShipState {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity kinds with their per-kind state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityKind {
    Asteroid,
    Ship(ShipState),
}

/// A simulated, drawable world object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub body: RigidBody,
    pub kind: EntityKind,
    /// Touched another entity during the current tick
    pub colliding: bool,
    /// Index triples into `body.vertices()`
    triangles: Vec<usize>,
}

impl Entity {
    /// Wrap a body, triangulating its hull
    pub fn new(id: u32, body: RigidBody, kind: EntityKind) -> Result<Self> {
        let triangles = triangulate(body.vertices())?;
        Ok(Self {
            id,
            body,
            kind,
            colliding: false,
            triangles,
        })
    }

    /// Random lumpy asteroid somewhere in the inner 3/4 of the world
    pub fn asteroid<R: Rng + ?Sized>(
        id: u32,
        rng: &mut R,
        config: &WorldConfig,
        extent: &Extent,
    ) -> Result<Self> {
        let CountRange { min, max } = config.asteroid_points;
        if min < 3 {
            return Err(PhysicsError::TooFewVertices { count: min });
        }
        if min >= max {
            return Err(PhysicsError::InvalidRange {
                min: min as f32,
                max: max as f32,
            });
        }
        let points = rng.random_range(min..max);
        let delta_angle = std::f32::consts::TAU / points as f32;
        let distance = config.asteroid_vertex_distance;

        let mut vertices = Vec::with_capacity(points);
        for i in 0..points {
            let dist = random_single(rng, distance.min, distance.max)?;
            vertices.push(crate::polar_to_cartesian(dist, i as f32 * delta_angle));
        }

        let spawn = extent.scaled(0.75);
        let position = Vec2::new(
            random_single(rng, spawn.min.x, spawn.max.x)?,
            random_single(rng, spawn.min.y, spawn.max.y)?,
        );

        let speed = random_single(rng, config.asteroid_speed.min, config.asteroid_speed.max)?;
        let velocity = random_direction(rng) * speed;

        let body = RigidBody::new(
            vertices,
            position,
            config.asteroid_density,
            config.asteroid_restitution,
        )
        .with_velocity(velocity);

        Self::new(id, body, EntityKind::Asteroid)
    }

    /// Player ship at rest
    pub fn ship(id: u32, position: Vec2, config: &WorldConfig) -> Result<Self> {
        let body = RigidBody::new(
            SHIP_HULL.to_vec(),
            position,
            config.ship_density,
            config.ship_restitution,
        );
        Self::new(id, body, EntityKind::Ship(ShipState::new()))
    }

    pub fn triangles(&self) -> &[usize] {
        &self.triangles
    }

    pub fn is_ship(&self) -> bool {
        matches!(self.kind, EntityKind::Ship(_))
    }

    /// Advance position and clear the per-tick collision flag
    pub fn integrate(&mut self, dt: f32, extent: &Extent) {
        self.body.integrate(dt, extent);
        self.colliding = false;
    }

    pub fn on_collision(&mut self) {
        self.colliding = true;
    }
}
