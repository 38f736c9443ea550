//! World configuration
//!
//! All tunables for world setup and the stepping loop. Loaded from JSON;
//! missing fields take their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Half-open scalar range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    pub min: f32,
    pub max: f32,
}

impl ScalarRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Half-open count range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

/// Configuration failures
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// JSON was malformed or had the wrong shape
    Parse(String),
    /// A value is out of its allowed range
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(msg) => write!(f, "failed to parse config: {msg}"),
            Self::Invalid { field, reason } => write!(f, "invalid config field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// World setup and stepping parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// RNG seed for asteroid layout and thruster flare
    pub seed: u64,

    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Asteroids ===
    pub asteroid_count: usize,
    pub asteroid_density: f32,
    pub asteroid_restitution: f32,
    /// Vertex count per asteroid (upper bound exclusive)
    pub asteroid_points: CountRange,
    /// Distance of each asteroid vertex from its center
    pub asteroid_vertex_distance: ScalarRange,
    pub asteroid_speed: ScalarRange,

    // === Ship ===
    pub ship_density: f32,
    pub ship_restitution: f32,
    /// Velocity gained per second of thrust
    pub thrust: f32,
    /// Radians per second
    pub rotation_speed: f32,
    /// Milliseconds between flare tip rerolls
    pub flare_interval_ms: f32,

    // === Debug ===
    pub show_collision_circles: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,

            world_width: 1280.0,
            world_height: 720.0,

            asteroid_count: 12,
            asteroid_density: ROCK,
            asteroid_restitution: 0.5,
            asteroid_points: CountRange { min: 6, max: 10 },
            asteroid_vertex_distance: ScalarRange::new(12.0, 24.0),
            asteroid_speed: ScalarRange::new(20.0, 20.0),

            ship_density: STEEL,
            ship_restitution: 0.5,
            thrust: SHIP_THRUST,
            rotation_speed: SHIP_ROTATION_SPEED,
            flare_interval_ms: FLARE_INTERVAL_MS,

            show_collision_circles: false,
        }
    }
}

impl WorldConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject values the world builder cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_width > 0.0) {
            return Err(invalid("world_width", "must be positive"));
        }
        if !(self.world_height > 0.0) {
            return Err(invalid("world_height", "must be positive"));
        }
        if self.asteroid_points.min < 3 {
            return Err(invalid("asteroid_points", "polygons need at least 3 points"));
        }
        if self.asteroid_points.min >= self.asteroid_points.max {
            return Err(invalid("asteroid_points", "min must be below max"));
        }
        if self.asteroid_points.max > MAX_TRIANGULATE_VERTICES + 1 {
            return Err(invalid("asteroid_points", "exceeds the triangulation limit"));
        }
        check_range("asteroid_vertex_distance", self.asteroid_vertex_distance)?;
        if self.asteroid_vertex_distance.min <= 0.0 {
            return Err(invalid("asteroid_vertex_distance", "must be positive"));
        }
        check_range("asteroid_speed", self.asteroid_speed)?;
        check_restitution("asteroid_restitution", self.asteroid_restitution)?;
        check_restitution("ship_restitution", self.ship_restitution)?;
        if !(self.flare_interval_ms > 0.0) {
            return Err(invalid("flare_interval_ms", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn check_range(field: &'static str, range: ScalarRange) -> Result<(), ConfigError> {
    if range.min > range.max {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("min {} is greater than max {}", range.min, range.max),
        });
    }
    Ok(())
}

fn check_restitution(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(field, "must be within [0, 1]"));
    }
    Ok(())
}
