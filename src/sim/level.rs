//! Level data and construction
//!
//! A `LevelDef` is one raw entry from the level pack, with every field
//! optional. `Level::new` resolves it once into the runtime level: theme,
//! physics knobs, spawn point, platforms and the spikes derived from the
//! floating platforms.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rect::{Bounds, Rect};
use super::spike::Spike;
use crate::consts::*;
use crate::settings::HazardTuning;

/// Colour theme (CSS-style colour strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeJson")]
pub struct Theme {
    pub bg: String,
    pub platform: String,
    pub blob: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: DEFAULT_BG.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            blob: DEFAULT_BLOB.to_string(),
        }
    }
}

/// Where (and how big) the player appears
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpawnPointJson")]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            x: DEFAULT_START_X,
            y: DEFAULT_START_Y,
            r: DEFAULT_START_R,
        }
    }
}

/// A static rectangle in the world. Position is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PlatformJson")]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

impl Bounds for Platform {
    #[inline]
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// One level as stored in the pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LevelDefJson")]
pub struct LevelDef {
    pub name: String,
    pub gravity: f32,
    #[serde(rename = "jumpV")]
    pub jump_v: f32,
    pub theme: Theme,
    pub start: SpawnPoint,
    pub platforms: Vec<Platform>,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            gravity: DEFAULT_GRAVITY,
            jump_v: DEFAULT_JUMP_V,
            theme: Theme::default(),
            start: SpawnPoint::default(),
            platforms: Vec::new(),
        }
    }
}

// Wire shapes for the pack. Hand-written packs may omit any field or set it
// to `null`; both resolve to the same default.

#[derive(Deserialize)]
struct ThemeJson {
    #[serde(default)]
    bg: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    blob: Option<String>,
}

impl From<ThemeJson> for Theme {
    fn from(raw: ThemeJson) -> Self {
        let d = Theme::default();
        Self {
            bg: raw.bg.unwrap_or(d.bg),
            platform: raw.platform.unwrap_or(d.platform),
            blob: raw.blob.unwrap_or(d.blob),
        }
    }
}

#[derive(Deserialize)]
struct SpawnPointJson {
    #[serde(default)]
    x: Option<f32>,
    #[serde(default)]
    y: Option<f32>,
    #[serde(default)]
    r: Option<f32>,
}

impl From<SpawnPointJson> for SpawnPoint {
    fn from(raw: SpawnPointJson) -> Self {
        Self {
            x: raw.x.unwrap_or(DEFAULT_START_X),
            y: raw.y.unwrap_or(DEFAULT_START_Y),
            r: raw.r.unwrap_or(DEFAULT_START_R),
        }
    }
}

#[derive(Deserialize)]
struct PlatformJson {
    #[serde(default)]
    x: Option<f32>,
    #[serde(default)]
    y: Option<f32>,
    #[serde(default)]
    w: Option<f32>,
    #[serde(default)]
    h: Option<f32>,
}

impl From<PlatformJson> for Platform {
    fn from(raw: PlatformJson) -> Self {
        Self {
            x: raw.x.unwrap_or_default(),
            y: raw.y.unwrap_or_default(),
            w: raw.w.unwrap_or_default(),
            h: raw.h.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct LevelDefJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    gravity: Option<f32>,
    #[serde(default, rename = "jumpV")]
    jump_v: Option<f32>,
    #[serde(default)]
    theme: Option<Theme>,
    #[serde(default)]
    start: Option<SpawnPoint>,
    #[serde(default)]
    platforms: Option<Vec<Platform>>,
}

impl From<LevelDefJson> for LevelDef {
    fn from(raw: LevelDefJson) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            gravity: raw.gravity.unwrap_or(DEFAULT_GRAVITY),
            jump_v: raw.jump_v.unwrap_or(DEFAULT_JUMP_V),
            theme: raw.theme.unwrap_or_default(),
            start: raw.start.unwrap_or_default(),
            platforms: raw.platforms.unwrap_or_default(),
        }
    }
}

/// A playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// HUD label
    pub name: String,
    pub theme: Theme,
    pub gravity: f32,
    pub jump_v: f32,
    pub start: SpawnPoint,
    pub platforms: Vec<Platform>,
    /// Derived from `platforms` once, at construction
    pub spikes: Vec<Spike>,
}

impl Level {
    pub fn new<R: Rng + ?Sized>(def: &LevelDef, hazards: &HazardTuning, rng: &mut R) -> Self {
        let name = if def.name.is_empty() {
            "Level".to_string()
        } else {
            def.name.clone()
        };
        let platforms = def.platforms.clone();
        let spikes = generate_spikes(&platforms, hazards, rng);

        log::debug!(
            "Built level '{name}': {} platforms, {} spikes",
            platforms.len(),
            spikes.len()
        );

        Self {
            name,
            theme: def.theme.clone(),
            gravity: def.gravity,
            jump_v: def.jump_v,
            start: def.start,
            platforms,
            spikes,
        }
    }

    /// Rightmost platform edge, or `default_w` without platforms
    pub fn infer_width(&self, default_w: f32) -> f32 {
        self.platforms
            .iter()
            .map(|p| p.x + p.w)
            .reduce(f32::max)
            .unwrap_or(default_w)
    }

    /// Lowest platform edge, or `default_h` without platforms
    pub fn infer_height(&self, default_h: f32) -> f32 {
        self.platforms
            .iter()
            .map(|p| p.y + p.h)
            .reduce(f32::max)
            .unwrap_or(default_h)
    }

    /// Advance every spike, then report whether any of them touches the player
    pub fn update_and_check_hazards<R: Rng + ?Sized>(
        &mut self,
        player: &Player,
        rng: &mut R,
    ) -> bool {
        for spike in &mut self.spikes {
            spike.update(rng);
        }
        self.spikes.iter().any(|s| s.hits_player(player))
    }
}

/// Place 1-2 spikes on every floating platform.
///
/// A platform floats when its top is above `hazards.floating_threshold`;
/// lower platforms are ground and stay safe. Spikes wider than their platform
/// are pinned to its left edge.
pub fn generate_spikes<R: Rng + ?Sized>(
    platforms: &[Platform],
    hazards: &HazardTuning,
    rng: &mut R,
) -> Vec<Spike> {
    let mut spikes = Vec::new();

    for p in platforms.iter().filter(|p| p.y < hazards.floating_threshold) {
        let count = if hazards.max_per_platform > hazards.min_per_platform {
            rng.random_range(hazards.min_per_platform..=hazards.max_per_platform)
        } else {
            hazards.min_per_platform
        };

        for _ in 0..count {
            let span = p.w - hazards.spike_width;
            let offset = if span > 0.0 {
                rng.random_range(0.0..=span)
            } else {
                0.0
            };
            spikes.push(Spike::random(p.x + offset, p.y, hazards, rng));
        }
    }

    spikes
}
