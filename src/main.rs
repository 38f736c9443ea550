//! Flat World headless runner
//!
//! Builds a world from an optional JSON config, flies the ship through a
//! scripted input pattern and logs what collided.

use std::path::Path;
use std::process::ExitCode;

use flat_world::consts::SIM_DT;
use flat_world::render::{DrawBatch, render_world};
use flat_world::sim::{WorldState, tick};
use flat_world::{InputState, Key, WorldConfig};

/// Ten seconds at 60 Hz
const RUN_TICKS: u32 = 600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flat World (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match WorldConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => WorldConfig::default(),
    };

    let mut state = match WorldState::new(config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to build world: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut input = InputState::new();
    let mut batch = DrawBatch::new();
    let mut contacts = 0usize;

    for step in 0..RUN_TICKS {
        // Burn for half a second, coast for one, turning while burning
        if step % 90 < 30 {
            input.update([Key::Thrust, Key::RotateLeft]);
        } else {
            input.update([]);
        }

        tick(&mut state, &input, SIM_DT);
        contacts += state.events.len();

        for event in &state.events {
            let other = if event.a == state.player_id {
                event.b
            } else if event.b == state.player_id {
                event.a
            } else {
                continue;
            };
            log::info!("Tick {}: ship hit entity {}", state.time_ticks, other);
        }

        batch.clear();
        render_world(&state, &mut batch);
    }

    log::info!(
        "Ran {} ticks ({:.1}s): {} contacts, last frame {} triangles",
        state.time_ticks,
        state.time_ms / 1000.0,
        contacts,
        batch.triangle_count()
    );
    if let Some(player) = state.player() {
        log::info!(
            "Ship at ({:.1}, {:.1}) moving ({:.1}, {:.1})",
            player.body.position.x,
            player.body.position.y,
            player.body.velocity.x,
            player.body.velocity.y
        );
    }

    ExitCode::SUCCESS
}
