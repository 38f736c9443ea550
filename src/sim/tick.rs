//! Fixed timestep simulation tick
//!
//! Order within a tick is fixed: player input, integration of every entity,
//! then one pairwise collision sweep in list order. Each pair is resolved
//! once against the velocities left by earlier pairs, so simultaneous
//! contacts are order dependent.

use super::collision::{intersect_circles_contact, separate, solve_collision};
use super::entity::EntityKind;
use super::state::{CollisionEvent, WorldState};
use crate::input::{InputState, Key};

/// Advance the world by one timestep of `dt` seconds
pub fn tick(state: &mut WorldState, input: &InputState, dt: f32) {
    state.time_ticks += 1;
    state.time_ms += f64::from(dt) * 1000.0;
    state.events.clear();

    apply_input(state, input, dt);

    for entity in &mut state.entities {
        entity.integrate(dt, &state.extent);
    }

    resolve_collisions(state);
}

/// Steer the player ship and animate its flare
fn apply_input(state: &mut WorldState, input: &InputState, dt: f32) {
    if input.is_clicked(Key::ToggleCollisionCircles) {
        state.show_collision_circles = !state.show_collision_circles;
        log::debug!("Collision circles: {}", state.show_collision_circles);
    }

    let rotation = state.config.rotation_speed * dt;
    let thrust = state.config.thrust * dt;
    let flare_interval = state.config.flare_interval_ms;
    let player_id = state.player_id;

    let Some(player) = state.entities.iter_mut().find(|e| e.id == player_id) else {
        return;
    };
    let EntityKind::Ship(ship) = &mut player.kind else {
        return;
    };

    if input.is_down(Key::RotateLeft) {
        player.body.rotate(rotation);
    }
    if input.is_down(Key::RotateRight) {
        player.body.rotate(-rotation);
    }

    if input.is_down(Key::Thrust) {
        ship.apply_thrust(&mut player.body, thrust);
    } else {
        ship.disable_thrust();
    }

    if let Err(err) = ship.update_flare(&mut state.rng, dt * 1000.0, flare_interval) {
        log::warn!("Flare reroll failed: {}", err);
    }
}

/// O(n²) sweep: every entity against every later one
fn resolve_collisions(state: &mut WorldState) {
    let entities = &mut state.entities;

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            let (head, tail) = entities.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            // Zero-area bodies have no proxy to collide with
            if a.body.collision_radius() <= 0.0 || b.body.collision_radius() <= 0.0 {
                continue;
            }

            let Some(contact) =
                intersect_circles_contact(&a.body.collision_circle(), &b.body.collision_circle())
            else {
                continue;
            };

            separate(&mut a.body, &mut b.body, &contact);
            solve_collision(&mut a.body, &mut b.body, contact.normal);

            a.on_collision();
            b.on_collision();

            log::debug!(
                "Contact {} <-> {} depth={:.3} normal=({:.3}, {:.3})",
                a.id,
                b.id,
                contact.depth,
                contact.normal.x,
                contact.normal.y
            );

            state.events.push(CollisionEvent {
                a: a.id,
                b: b.id,
                depth: contact.depth,
                normal: contact.normal,
            });
        }
    }
}
