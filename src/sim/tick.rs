//! Per-frame simulation tick
//!
//! Core game loop that advances the session by exactly one frame. Ordering
//! matters: the player is fully resolved against the platforms before spikes
//! move and are tested against the new position.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Left held (A / left arrow)
    pub left: bool,
    /// Right held (D / right arrow)
    pub right: bool,
    /// Jump pressed this frame (space / W / up arrow)
    pub jump: bool,
    /// Cycle to the next level (N)
    pub next_level: bool,
}

impl TickInput {
    /// Net horizontal input: -1, 0 or +1. Both keys held cancel out.
    pub fn move_axis(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.next_level {
        events.push(state.next_level());
    }

    if input.jump && state.player.jump() {
        events.push(GameEvent::Jumped);
    }

    let was_grounded = state.player.on_ground;
    let hit = state
        .player
        .update(input.move_axis(), &state.level.platforms, state.world_width);
    if hit.landed && !was_grounded {
        events.push(GameEvent::Landed);
    }
    if hit.bumped {
        events.push(GameEvent::Bumped);
    }

    if state
        .level
        .update_and_check_hazards(&state.player, &mut state.rng)
    {
        state.respawn();
        events.push(GameEvent::Died);
    }

    state.time_ticks += 1;
    events
}
