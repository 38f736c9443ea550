//! Flat World - 2D geometry and collision physics for a top-down asteroids world
//!
//! Core modules:
//! - `math`: Vector helpers, wrap-around indexing, random sampling, transforms
//! - `sim`: Deterministic simulation (polygons, triangulation, collisions, bodies, tick)
//! - `input`: Explicitly owned keyboard state with edge detection
//! - `render`: Triangle batches handed to an external renderer
//! - `config`: Data-driven world tuning

pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod render;
pub mod sim;

pub use config::{ConfigError, WorldConfig};
pub use error::{PhysicsError, Result};
pub use input::{InputState, Key};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Largest polygon the triangulator accepts (caps the O(n³) worst case)
    pub const MAX_TRIANGULATE_VERTICES: usize = 1024;

    /// Density bounds, kg/m²
    pub const MIN_DENSITY: f32 = 600.0;
    pub const MAX_DENSITY: f32 = 22_000.0;

    /// Common material densities
    pub const ROCK: f32 = 2_739.0;
    pub const STEEL: f32 = 8_050.0;
    pub const GOLD: f32 = 19_300.0;

    /// Ship defaults
    pub const SHIP_THRUST: f32 = 50.0;
    pub const SHIP_ROTATION_SPEED: f32 = std::f32::consts::PI;
    /// Milliseconds between thruster flare rerolls
    pub const FLARE_INTERVAL_MS: f32 = 60.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert!((wrap_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert_eq!(wrap_angle(TAU), 0.0);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }
}
