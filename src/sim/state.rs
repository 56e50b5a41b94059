//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; components borrow only
//! the parts they need.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::{AnimationFrames, Animator, Frame};
use super::backdrop::{Cloud, generate_clouds};
use super::camera::Camera;
use super::occupancy::{OccupancyRegistry, RegionId};
use super::rect::Rect;
use super::spawner;
use super::worldgen::{WorldLayout, generate_world};
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::ConfigError;

/// Which cat sprite to draw (index into the host's cat images)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatVariant(pub u8);

/// A collectible cat
///
/// Collected cats stay in the list; `collected` marks them as gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub rect: Rect,
    pub variant: CatVariant,
    /// Claim held in the occupancy registry while uncollected
    pub region: RegionId,
    pub collected: bool,
}

/// A swaying flower on the ground
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flower {
    /// Stem base x
    pub x: f32,
    /// Stem base y (ground top)
    pub y: f32,
    /// Sway phase in radians
    pub phase: f32,
    /// Index into the renderer's flower palette
    pub color: u8,
    pub rect: Rect,
}

impl Flower {
    /// Stem x including sway at the given wall-clock time
    pub fn sway_x(&self, time_ms: f32) -> f32 {
        self.x + (time_ms / 400.0 + self.phase).sin() * 4.0
    }
}

/// A bush decoration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bush {
    pub rect: Rect,
}

/// Cats and decorations, plus the registry keeping them apart
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub registry: OccupancyRegistry,
    pub collectibles: Vec<Collectible>,
    pub flowers: Vec<Flower>,
    pub bushes: Vec<Bush>,
    next_cat_id: u32,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new cat ID
    pub fn next_cat_id(&mut self) -> u32 {
        let id = self.next_cat_id;
        self.next_cat_id += 1;
        id
    }

    /// Cats still waiting to be collected
    pub fn active_count(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Per-tick velocity; positive y is down
    pub vel: Vec2,
    pub grounded: bool,
    pub animator: Animator,
}

impl Player {
    /// Player standing at the start position with feet on `ground_top`
    pub fn spawn(ground_top: f32) -> Self {
        Self {
            rect: Rect::standing_on(PLAYER_START_X, ground_top, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            grounded: true,
            animator: Animator::default(),
        }
    }

    /// Sprite is mirrored while moving left
    pub fn flip(&self) -> bool {
        self.vel.x < 0.0
    }
}

/// Things that happened during the last tick, for audio and UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CatCollected { id: u32, variant: CatVariant },
    CatSpawned { id: u32 },
    Jumped,
    Landed,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub layout: WorldLayout,
    pub population: Population,
    pub player: Player,
    pub camera: Camera,
    pub clouds: Vec<Cloud>,
    pub frames: AnimationFrames,
    /// Frame selected by the last tick
    pub frame: Frame,
    /// Cats collected this run
    pub collected_count: u32,
    /// Ticks since the last respawn round
    pub spawn_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cleared when the host asks to quit
    pub running: bool,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate the config and build a fresh world from `seed`
    pub fn new(config: GameConfig, seed: u64, frames: AnimationFrames) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("Refusing to start: {}", e);
            return Err(e);
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let layout = generate_world(&config, &mut rng);

        let mut population = Population::new();
        spawner::spawn_on_surface(&mut population, &layout.ground, INITIAL_GROUND_CATS, &mut rng);
        for platform in &layout.platforms {
            spawner::spawn_on_surface(&mut population, &platform.rect, 1, &mut rng);
        }
        spawner::place_flowers(&mut population, &config, &mut rng);
        spawner::place_bushes(&mut population, &config, &mut rng);

        let clouds = generate_clouds(&config, &mut rng);
        let player = Player::spawn(config.ground_top());
        let frame = frames.idle.first().map_or(Frame::Blank, |&id| Frame::Sprite(id));

        log::info!(
            "World ready (seed {}): {} cats, {} flowers, {} bushes",
            seed,
            population.collectibles.len(),
            population.flowers.len(),
            population.bushes.len()
        );

        Ok(Self {
            config,
            seed,
            rng,
            layout,
            population,
            player,
            camera: Camera::default(),
            clouds,
            frames,
            frame,
            collected_count: 0,
            spawn_timer: 0,
            time_ticks: 0,
            running: true,
            events: Vec::new(),
        })
    }
}
