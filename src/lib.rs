//! Blob Platformer - a JSON-driven 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, collisions, spikes, levels)
//! - `levels`: Level pack loading from JSON
//! - `settings`: Data-driven tuning (player, hazards, world)

pub mod levels;
pub mod settings;
pub mod sim;

pub use levels::LevelPack;
pub use settings::{HazardTuning, PlayerTuning, Settings, WorldSettings};

/// Game configuration constants
pub mod consts {
    /// Default gravity added to vertical velocity every tick
    pub const DEFAULT_GRAVITY: f32 = 0.65;
    /// Default jump impulse (negative = upward, screen coordinates)
    pub const DEFAULT_JUMP_V: f32 = -11.0;

    /// Default spawn point
    pub const DEFAULT_START_X: f32 = 80.0;
    pub const DEFAULT_START_Y: f32 = 180.0;
    pub const DEFAULT_START_R: f32 = 26.0;

    /// Default theme colours
    pub const DEFAULT_BG: &str = "#F0F0F0";
    pub const DEFAULT_PLATFORM: &str = "#C8C8C8";
    pub const DEFAULT_BLOB: &str = "#1478FF";

    /// Fallback world size when a level has no platforms
    pub const DEFAULT_WORLD_WIDTH: f32 = 640.0;
    pub const DEFAULT_WORLD_HEIGHT: f32 = 360.0;

    /// Platforms whose top is above this row are "floating" and host spikes
    pub const FLOATING_THRESHOLD: f32 = 300.0;

    /// Spike defaults
    pub const SPIKE_WIDTH: f32 = 20.0;
    pub const SPIKE_HEIGHT: f32 = 40.0;
    pub const SPIKE_MIN_SPEED: f32 = 0.8;
    pub const SPIKE_MAX_SPEED: f32 = 3.0;
    /// Per-tick chance a retracted spike starts rising again
    pub const SPIKE_RESUME_CHANCE: f64 = 0.02;
}

/// Clamp without panicking when `lo > hi` (the upper bound wins)
#[inline]
pub fn constrain(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}
