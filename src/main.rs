//! Blob Platformer headless runner
//!
//! Loads a level pack, plays a scripted session through every level and logs
//! what happened. Drawing is left to a front end; this drives the simulation
//! exactly as one would, one tick per frame.
//!
//! Usage: `blob-platformer [levels.json] [settings.json]`

use anyhow::Result;

use blob_platformer::sim::{GameEvent, GameState, TickInput, tick};
use blob_platformer::{LevelPack, Settings};

/// Frames played per level (10 seconds at 60 fps)
const FRAMES_PER_LEVEL: u32 = 600;

/// Scripted input: run right, back off now and then, hop on a fixed rhythm
fn scripted_input(frame: u32) -> TickInput {
    TickInput {
        left: frame % 180 >= 150,
        right: frame % 180 < 120,
        jump: frame % 40 == 0,
        next_level: false,
    }
}

/// Play one level for `FRAMES_PER_LEVEL` ticks and return the jump count.
///
/// Every round after the first switches level on its first frame.
fn play_round(state: &mut GameState, round: usize) -> u32 {
    let mut jumps = 0u32;
    for frame in 0..FRAMES_PER_LEVEL {
        let mut input = scripted_input(frame);
        input.next_level = round > 0 && frame == 0;
        for event in tick(state, &input) {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Died => log::debug!("Frame {frame}: hit a spike"),
                GameEvent::Landed | GameEvent::Bumped | GameEvent::LevelLoaded { .. } => {}
            }
        }
    }
    jumps
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Blob Platformer (headless) starting...");

    let mut args = std::env::args().skip(1);
    let pack = match args.next() {
        Some(path) => LevelPack::load(path)?,
        None => LevelPack::builtin()?,
    };
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let level_count = pack.len().max(1);
    let mut state = GameState::new(pack, settings);

    for round in 0..level_count {
        let deaths_before = state.deaths;
        let jumps = play_round(&mut state, round);

        println!(
            "{:<16} spikes: {:>2}  jumps: {:>3}  deaths: {:>3}  end: ({:.1}, {:.1})",
            state.level.name,
            state.level.spikes.len(),
            jumps,
            state.deaths - deaths_before,
            state.player.pos.x,
            state.player.pos.y,
        );
    }

    log::info!(
        "Finished {} ticks with {} deaths",
        state.time_ticks,
        state.deaths
    );
    Ok(())
}
