//! Game state and level switching
//!
//! `GameState` owns everything that changes during a session: the player, the
//! current level and the seeded RNG that drives spike placement and timing.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{Level, LevelDef};
use super::player::Player;
use crate::levels::LevelPack;
use crate::settings::Settings;

/// Something that happened during a tick, for HUD, audio or logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A level was (re)built and the player spawned in it
    LevelLoaded { index: usize, name: String },
    Jumped,
    /// Touched down after being airborne
    Landed,
    /// Hit the underside of a platform while rising
    Bumped,
    /// Hit a spike and respawned
    Died,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub settings: Settings,
    /// Raw level definitions; never empty
    pack: Vec<LevelDef>,
    pub level_index: usize,
    pub level: Level,
    pub player: Player,
    /// Horizontal bound for the player, inferred from the level geometry
    pub world_width: f32,
    pub world_height: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub deaths: u32,
}

impl GameState {
    /// Create a session on the first level of `pack`
    pub fn new(pack: LevelPack, settings: Settings) -> Self {
        let mut levels = pack.levels;
        if levels.is_empty() {
            log::warn!("Level pack is empty, using a default level");
            levels.push(LevelDef::default());
        }

        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let level = Level::new(&levels[0], &settings.hazards, &mut rng);
        let mut state = Self {
            seed: settings.seed,
            rng,
            player: Player::new(settings.player.clone()),
            world_width: settings.world.default_width,
            world_height: settings.world.default_height,
            settings,
            pack: levels,
            level_index: 0,
            level,
            time_ticks: 0,
            deaths: 0,
        };
        state.fit_world();
        state.player.spawn_from_level(&state.level);
        state
    }

    /// Level definitions in play order
    pub fn levels(&self) -> &[LevelDef] {
        &self.pack
    }

    /// Replace the current level with `index` (wrapping) and respawn the player
    pub fn load_level(&mut self, index: usize) -> GameEvent {
        let index = index % self.pack.len();
        self.level = Level::new(&self.pack[index], &self.settings.hazards, &mut self.rng);
        self.level_index = index;
        self.fit_world();
        self.player.spawn_from_level(&self.level);

        log::info!(
            "Loaded level {} '{}' ({}x{})",
            index,
            self.level.name,
            self.world_width,
            self.world_height
        );
        GameEvent::LevelLoaded {
            index,
            name: self.level.name.clone(),
        }
    }

    /// Cycle to the next level in the pack
    pub fn next_level(&mut self) -> GameEvent {
        self.load_level(self.level_index + 1)
    }

    /// Put the player back at the level's spawn point
    pub fn respawn(&mut self) {
        self.player.spawn_from_level(&self.level);
        self.deaths += 1;
        log::debug!("Respawned in '{}' (deaths: {})", self.level.name, self.deaths);
    }

    fn fit_world(&mut self) {
        self.world_width = self.level.infer_width(self.settings.world.default_width);
        self.world_height = self.level.infer_height(self.settings.world.default_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Platform, SpawnPoint};
    use glam::Vec2;

    fn two_level_pack() -> LevelPack {
        LevelPack {
            levels: vec![
                LevelDef {
                    name: "Intro Steps".to_string(),
                    platforms: vec![
                        Platform::new(0.0, 324.0, 640.0, 36.0),
                        Platform::new(120.0, 254.0, 120.0, 12.0),
                    ],
                    ..Default::default()
                },
                LevelDef {
                    name: "Low Gravity".to_string(),
                    gravity: 0.3,
                    jump_v: -8.0,
                    start: SpawnPoint {
                        x: 40.0,
                        y: 100.0,
                        r: 20.0,
                    },
                    platforms: vec![Platform::new(0.0, 400.0, 800.0, 40.0)],
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_new_spawns_on_first_level() {
        let state = GameState::new(two_level_pack(), Settings::default());
        assert_eq!(state.level_index, 0);
        assert_eq!(state.level.name, "Intro Steps");
        assert_eq!(state.player.pos, Vec2::new(80.0, 180.0));
        assert_eq!(state.world_width, 640.0);
        assert_eq!(state.world_height, 360.0);
    }

    #[test]
    fn test_empty_pack_falls_back_to_default_level() {
        let state = GameState::new(LevelPack::default(), Settings::default());
        assert_eq!(state.levels().len(), 1);
        assert_eq!(state.level.name, "Level");
        assert_eq!(state.world_width, Settings::default().world.default_width);
    }

    #[test]
    fn test_level_cycling_wraps_and_reparameterizes() {
        let mut state = GameState::new(two_level_pack(), Settings::default());
        state.player.vel = Vec2::new(3.0, -5.0);

        let event = state.next_level();
        assert_eq!(
            event,
            GameEvent::LevelLoaded {
                index: 1,
                name: "Low Gravity".to_string()
            }
        );
        assert_eq!(state.player.gravity, 0.3);
        assert_eq!(state.player.jump_v, -8.0);
        assert_eq!(state.player.pos, Vec2::new(40.0, 100.0));
        assert_eq!(state.player.r, 20.0);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.world_width, 800.0);

        state.next_level();
        assert_eq!(state.level_index, 0);
        assert_eq!(state.player.gravity, 0.65);

        // Any index wraps into the pack
        let event = state.load_level(7);
        assert_eq!(state.level_index, 1);
        assert_eq!(
            event,
            GameEvent::LevelLoaded {
                index: 1,
                name: "Low Gravity".to_string()
            }
        );
        assert_eq!(state.levels().len(), 2);
    }

    #[test]
    fn test_same_seed_same_spikes() {
        let a = GameState::new(two_level_pack(), Settings::default());
        let b = GameState::new(two_level_pack(), Settings::default());
        assert_eq!(a.level.spikes, b.level.spikes);
        assert!(!a.level.spikes.is_empty());
    }

    #[test]
    fn test_respawn_counts_deaths() {
        let mut state = GameState::new(two_level_pack(), Settings::default());
        state.player.pos = Vec2::new(500.0, 10.0);
        state.respawn();
        assert_eq!(state.deaths, 1);
        assert_eq!(state.player.pos, Vec2::new(80.0, 180.0));
    }
}
