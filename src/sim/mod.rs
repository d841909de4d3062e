//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Injected RNG only (seeded `Pcg32` in `GameState`)
//! - Stable iteration order (platform list order)
//! - No rendering or input-polling dependencies

pub mod collision;
pub mod level;
pub mod player;
pub mod rect;
pub mod spike;
pub mod state;
pub mod tick;

pub use collision::{AxisHit, sweep_x, sweep_y};
pub use level::{Level, LevelDef, Platform, SpawnPoint, Theme, generate_spikes};
pub use player::Player;
pub use rect::{Bounds, Rect, overlaps};
pub use spike::Spike;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
