//! Background scenery state
//!
//! Clouds drift across the sky independently of the player. The renderer owns
//! how they (and the hill layers) look; the simulation only tracks where.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{CLOUD_SPACING, CLOUD_WRAP_X};

/// A drifting cloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// World units per tick
    pub speed: f32,
    /// Lets the renderer rebuild the same blob shape every frame
    pub shape_seed: u32,
}

impl Cloud {
    /// Move right, wrapping back in from the left once past the world edge
    pub fn drift(&mut self, world_width: f32) {
        self.x += self.speed;
        if self.x > world_width {
            self.x = CLOUD_WRAP_X;
        }
    }
}

/// One cloud per spacing column, jittered
pub fn generate_clouds<R: Rng>(config: &GameConfig, rng: &mut R) -> Vec<Cloud> {
    (0..config.world_width as usize)
        .step_by(CLOUD_SPACING)
        .map(|column| Cloud {
            x: column as f32 + rng.random_range(-20.0..=20.0),
            y: 50.0 + rng.random_range(-20.0..=20.0),
            width: rng.random_range(120.0..=200.0),
            height: rng.random_range(60.0..=100.0),
            speed: rng.random_range(0.1..0.3),
            shape_seed: rng.random(),
        })
        .collect()
}
