//! Render output
//!
//! Turns world state into indexed triangle batches. Rasterization, buffers
//! and draw calls belong to the host renderer.

pub mod batch;
pub mod vertex;

pub use batch::DrawBatch;
pub use vertex::{Vertex, colors};

use crate::sim::{Entity, EntityKind, WorldState};

/// Collision circle outline thickness, world units
const CIRCLE_THICKNESS: f32 = 1.0;
const CIRCLE_SEGMENTS: u32 = 32;

/// Flare is a single triangle
const FLARE_TRIANGLE: [usize; 3] = [0, 1, 2];

/// Something that can add itself to a draw batch
pub trait Drawable {
    fn draw(&self, batch: &mut DrawBatch);
}

impl Drawable for Entity {
    fn draw(&self, batch: &mut DrawBatch) {
        let transform = self.body.transform();

        match &self.kind {
            EntityKind::Asteroid => {
                batch.push_polygon(self.body.vertices(), self.triangles(), &transform, colors::ASTEROID);
            }
            EntityKind::Ship(ship) => {
                if ship.thrusting {
                    batch.push_polygon(&ship.flare, &FLARE_TRIANGLE, &transform, colors::FLARE);
                }
                batch.push_polygon(self.body.vertices(), self.triangles(), &transform, colors::SHIP);
            }
        }
    }
}

/// Outline of an entity's collision proxy, red while colliding
pub fn draw_collision_circle(entity: &Entity, batch: &mut DrawBatch) {
    let color = if entity.colliding {
        colors::COLLIDING
    } else {
        colors::COLLISION_CIRCLE
    };
    let circle = entity.body.collision_circle();
    batch.push_circle_outline(circle.center, circle.radius, CIRCLE_THICKNESS, CIRCLE_SEGMENTS, color);
}

/// Draw every entity, plus collision circles when the overlay is on
pub fn render_world(state: &WorldState, batch: &mut DrawBatch) {
    for entity in &state.entities {
        entity.draw(batch);
    }

    if state.show_collision_circles {
        for entity in &state.entities {
            draw_collision_circle(entity, batch);
        }
    }
}
