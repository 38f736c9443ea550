//! World state and core simulation types
//!
//! Everything the stepping loop owns lives here. Entities hold no references
//! to each other; removing one from `entities` is all it takes to destroy it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::extent::Extent;
use crate::config::WorldConfig;
use crate::error::Result;

/// A contact resolved during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Entity ids, `a` earlier in the list than `b`
    pub a: u32,
    pub b: u32,
    pub depth: f32,
    /// Unit normal from `a` toward `b`
    pub normal: Vec2,
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub config: WorldConfig,
    /// Toroidal world bounds
    pub extent: Extent,
    /// Seeded RNG
    pub rng: Pcg32,
    /// Active entities in stepping order
    pub entities: Vec<Entity>,
    /// Id of the player ship
    pub player_id: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated time
    pub time_ms: f64,
    /// Debug overlay toggle
    pub show_collision_circles: bool,
    /// Contacts from the most recent tick
    #[serde(skip)]
    pub events: Vec<CollisionEvent>,
    /// Next entity ID
    next_id: u32,
}

impl WorldState {
    /// Build a world: the ship at the origin followed by the configured asteroids
    pub fn new(config: WorldConfig) -> Result<Self> {
        let extent = Extent::centered(config.world_width, config.world_height);
        let mut state = Self {
            rng: Pcg32::seed_from_u64(config.seed),
            extent,
            entities: Vec::with_capacity(config.asteroid_count + 1),
            player_id: 0,
            time_ticks: 0,
            time_ms: 0.0,
            show_collision_circles: config.show_collision_circles,
            events: Vec::new(),
            next_id: 1,
            config,
        };

        let ship_id = state.next_entity_id();
        let ship = Entity::ship(ship_id, Vec2::ZERO, &state.config)?;
        state.entities.push(ship);
        state.player_id = ship_id;

        for _ in 0..state.config.asteroid_count {
            let id = state.next_entity_id();
            let asteroid = Entity::asteroid(id, &mut state.rng, &state.config, &state.extent)?;
            state.entities.push(asteroid);
        }

        log::info!(
            "World {}x{} seeded {}: {} entities",
            state.extent.width(),
            state.extent.height(),
            state.config.seed,
            state.entities.len()
        );

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an entity; it joins the collision sweep on the next tick
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by id
    pub fn despawn(&mut self, id: u32) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entity(self.player_id)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        let id = self.player_id;
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Whether the player ship is firing its thruster
    pub fn player_thrusting(&self) -> bool {
        self.player()
            .is_some_and(|e| matches!(&e.kind, EntityKind::Ship(ship) if ship.thrusting))
    }
}
