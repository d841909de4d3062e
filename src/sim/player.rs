//! The player blob
//!
//! Owns all dynamic player state: transform, velocity, movement tuning and
//! ground state. Physics parameters (gravity, jump impulse) are copied from the
//! current level on spawn; the player never holds a reference to the level.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{AxisHit, sweep_x, sweep_y};
use super::level::Level;
use super::rect::{Bounds, Rect};
use crate::constrain;
use crate::consts::*;
use crate::settings::PlayerTuning;

/// A round blob collided as a square box of side `2 * r`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    /// Radius (half the box side)
    pub r: f32,
    pub vel: Vec2,
    pub tuning: PlayerTuning,
    /// Copied from the level on spawn
    pub gravity: f32,
    /// Copied from the level on spawn (negative = upward)
    pub jump_v: f32,
    /// True only right after a downward collision in the latest update
    pub on_ground: bool,
    /// Pressed against a wall during the latest update
    pub against_wall: bool,
    /// Animation clock for the outline wobble
    pub t: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerTuning::default())
    }
}

impl Player {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            r: DEFAULT_START_R,
            vel: Vec2::ZERO,
            tuning,
            gravity: DEFAULT_GRAVITY,
            jump_v: DEFAULT_JUMP_V,
            on_ground: false,
            against_wall: false,
            t: 0.0,
        }
    }

    /// Apply level physics and place the player at the level's spawn point.
    ///
    /// Also used for respawning after a hazard hit.
    pub fn spawn_from_level(&mut self, level: &Level) {
        self.gravity = level.gravity;
        self.jump_v = level.jump_v;

        self.pos = Vec2::new(level.start.x, level.start.y);
        self.r = level.start.r.max(0.0);

        self.vel = Vec2::ZERO;
        self.on_ground = false;
        self.against_wall = false;
    }

    /// Collision box around the blob
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.pos.x, self.pos.y, self.r)
    }

    /// One physics step: input, friction, gravity, then X and Y collision
    /// resolution against `platforms`.
    ///
    /// `move_axis` is -1 (left), 0 or +1 (right). Returns the vertical
    /// contacts, so callers can react to landings and head bumps.
    pub fn update<B: Bounds>(
        &mut self,
        move_axis: f32,
        platforms: &[B],
        world_width: f32,
    ) -> AxisHit {
        let move_axis = move_axis.clamp(-1.0, 1.0);
        let tuning = &self.tuning;

        self.vel.x += tuning.accel * move_axis;
        self.vel.x *= if self.on_ground {
            tuning.friction_ground
        } else {
            tuning.friction_air
        };
        self.vel.x = constrain(self.vel.x, -tuning.max_run, tuning.max_run);

        // Gravity accumulates even on the ground; landing cancels it again
        self.vel.y += self.gravity;

        let mut body = self.bounds();
        self.against_wall = sweep_x(&mut body, &mut self.vel.x, platforms).blocked;

        // Ground state is recomputed from scratch by the Y sweep
        let hit = sweep_y(&mut body, &mut self.vel.y, platforms);
        self.on_ground = hit.landed;

        let (cx, cy) = body.center();
        self.pos = Vec2::new(constrain(cx, self.r, world_width - self.r), cy);

        self.t += self.tuning.t_speed;
        hit
    }

    /// Jump if standing on something. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel.y = self.jump_v;
        self.on_ground = false;
        true
    }

    /// Wobbly outline vertices for drawing.
    ///
    /// `noise(x, y, t)` must return values in `[0, 1]`; each vertex samples it
    /// on a small circle so neighbouring vertices move together.
    pub fn outline(&self, noise: impl Fn(f32, f32, f32) -> f32) -> Vec<Vec2> {
        let points = self.tuning.points.max(1);
        let wobble = self.tuning.wobble;
        let freq = self.tuning.wobble_freq;

        (0..points)
            .map(|i| {
                let a = i as f32 / points as f32 * std::f32::consts::TAU;
                let (sin, cos) = a.sin_cos();
                let n = noise(cos * freq + 100.0, sin * freq + 100.0, self.t);
                let rr = self.r + (-wobble + n * 2.0 * wobble);
                self.pos + Vec2::new(cos, sin) * rr
            })
            .collect()
    }
}
