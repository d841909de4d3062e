//! Game settings and tuning
//!
//! Loaded from a JSON file next to the level pack. Every section and field is
//! optional; anything missing falls back to the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player movement and blob-look tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal acceleration per tick while a direction is held
    pub accel: f32,
    /// Maximum horizontal speed
    pub max_run: f32,
    /// Multiplicative friction while airborne (keeps momentum)
    pub friction_air: f32,
    /// Multiplicative friction while grounded (stops quickly)
    pub friction_ground: f32,

    // === Blob look (cosmetic) ===
    /// Animation clock advance per tick
    pub t_speed: f32,
    /// Maximum outline displacement
    pub wobble: f32,
    /// Outline vertex count
    pub points: u32,
    /// Noise sampling frequency around the circle
    pub wobble_freq: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            accel: 0.55,
            max_run: 4.0,
            friction_air: 0.995,
            friction_ground: 0.88,

            t_speed: 0.01,
            wobble: 7.0,
            points: 48,
            wobble_freq: 0.9,
        }
    }
}

/// Spike generation and animation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    /// Platforms with a top edge above this row host spikes
    pub floating_threshold: f32,
    pub spike_width: f32,
    pub spike_height: f32,
    /// Extension speed range, `[min, max)`
    pub min_speed: f32,
    pub max_speed: f32,
    /// Spikes per floating platform, inclusive range
    pub min_per_platform: u32,
    pub max_per_platform: u32,
    /// Per-tick chance a fully retracted spike starts rising again
    pub resume_chance: f64,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            floating_threshold: FLOATING_THRESHOLD,
            spike_width: SPIKE_WIDTH,
            spike_height: SPIKE_HEIGHT,
            min_speed: SPIKE_MIN_SPEED,
            max_speed: SPIKE_MAX_SPEED,
            min_per_platform: 1,
            max_per_platform: 2,
            resume_chance: SPIKE_RESUME_CHANCE,
        }
    }
}

/// World sizing fallbacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Width used when a level has no platforms to infer it from
    pub default_width: f32,
    /// Height used when a level has no platforms to infer it from
    pub default_height: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WORLD_WIDTH,
            default_height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

/// Top-level settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for spike placement and timing
    pub seed: u64,
    pub world: WorldSettings,
    pub player: PlayerTuning,
    pub hazards: HazardTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x0B10_B5EED,
            world: WorldSettings::default(),
            player: PlayerTuning::default(),
            hazards: HazardTuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        use anyhow::Context;

        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
