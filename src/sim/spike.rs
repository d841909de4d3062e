//! Rising spike hazards
//!
//! A spike sits on a platform top and oscillates between fully retracted
//! (zero height) and fully extended (`max_height`). After retracting it dwells
//! at zero until a per-tick coin flip sends it up again, so timing is random
//! but reproducible from the injected RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rect::{Rect, overlaps};
use crate::constrain;
use crate::consts::SPIKE_RESUME_CHANCE;
use crate::settings::HazardTuning;

fn default_resume_chance() -> f64 {
    SPIKE_RESUME_CHANCE
}

/// An animated spike anchored to a platform top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    /// Left edge
    pub x: f32,
    /// Platform top the spike rises from
    pub base_y: f32,
    pub width: f32,
    /// Nominal height, which is also the rise distance
    pub height: f32,
    /// Current extension, always within `[0, max_height]`
    pub current_height: f32,
    /// Extension/retraction per tick
    pub speed: f32,
    pub moving_up: bool,
    /// Copy of `height` taken at construction
    pub max_height: f32,
    #[serde(default = "default_resume_chance")]
    pub resume_chance: f64,
}

impl Spike {
    /// A fully retracted spike that starts rising on its first update
    pub fn new(x: f32, base_y: f32, width: f32, height: f32, speed: f32) -> Self {
        let height = height.max(0.0);
        Self {
            x,
            base_y,
            width,
            height,
            current_height: 0.0,
            speed,
            moving_up: true,
            max_height: height,
            resume_chance: SPIKE_RESUME_CHANCE,
        }
    }

    /// A spike with random speed and initial direction
    pub fn random<R: Rng + ?Sized>(
        x: f32,
        base_y: f32,
        hazards: &HazardTuning,
        rng: &mut R,
    ) -> Self {
        let speed = if hazards.max_speed > hazards.min_speed {
            rng.random_range(hazards.min_speed..hazards.max_speed)
        } else {
            hazards.min_speed
        };
        let mut spike = Self::new(x, base_y, hazards.spike_width, hazards.spike_height, speed);
        spike.moving_up = rng.random_bool(0.5);
        spike.resume_chance = hazards.resume_chance;
        spike
    }

    /// True when fully retracted and waiting to rise again
    pub fn is_retracted(&self) -> bool {
        !self.moving_up && self.current_height <= 0.0
    }

    /// Advance the oscillation by one tick
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.moving_up {
            self.current_height = constrain(self.current_height + self.speed, 0.0, self.max_height);
            if self.current_height >= self.max_height {
                self.moving_up = false;
            }
        } else if self.current_height > 0.0 {
            self.current_height = constrain(self.current_height - self.speed, 0.0, self.max_height);
        } else if rng.random_bool(self.resume_chance.clamp(0.0, 1.0)) {
            // Rising starts on the next tick
            self.moving_up = true;
        }
    }

    /// Current hit box (zero height when retracted)
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.x,
            self.base_y - self.current_height,
            self.width,
            self.current_height,
        )
    }

    /// A retracted spike is harmless even when the player straddles its base
    pub fn hits_player(&self, player: &Player) -> bool {
        self.current_height > 0.0 && overlaps(&player.bounds(), &self.hitbox())
    }
}
