//! Deterministic simulation module
//!
//! All geometry and physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entity list order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod entity;
pub mod extent;
pub mod polygon;
pub mod state;
pub mod tick;
pub mod triangulate;

pub use body::RigidBody;
pub use collision::{
    Circle, Contact, intersect_circles, intersect_circles_contact, separate, solve_collision,
};
pub use entity::{Entity, EntityKind, SHIP_HULL, ShipState};
pub use extent::Extent;
pub use polygon::{collision_radius, is_point_in_triangle, polygon_area};
pub use state::{CollisionEvent, WorldState};
pub use tick::tick;
pub use triangulate::triangulate;
