//! Crazy Cat Lady - A side-scrolling cat collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world generation, physics, spawning, camera, animation)
//! - `config`: World constants with validation
//! - `audio`: Sound effect hand-off to an external audio backend
//! - `clock`: Fixed timestep accumulator for host loops

pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod sim;

pub use clock::FixedTimestep;
pub use config::GameConfig;
pub use error::ConfigError;

/// Game tuning constants that are not exposed through [`GameConfig`]
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one physics step per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Widest accepted world; keeps f32 positions exact enough for the
    /// generation cursor and decoration columns to keep advancing
    pub const MAX_WORLD_WIDTH: f32 = 16_777_216.0;

    /// Ground strip thickness (its top sits at viewport_height - GROUND_HEIGHT)
    pub const GROUND_HEIGHT: f32 = 60.0;

    /// Player footprint
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Player spawn x (y is chosen so the feet rest on the ground)
    pub const PLAYER_START_X: f32 = 100.0;

    /// Landing tolerance band above a platform top (prevents snapping up from below)
    pub const LANDING_TOLERANCE: f32 = 10.0;
    /// Safety factor applied to the jump height used by world generation
    pub const JUMP_HEIGHT_MARGIN: f32 = 1.5;

    /// Platform layout
    pub const PLATFORM_THICKNESS: f32 = 10.0;
    pub const PLATFORM_START_X: f32 = 500.0;
    pub const PLATFORM_END_MARGIN: f32 = 200.0;
    /// Platform top is viewport_height minus a rise drawn from this band
    pub const PLATFORM_RISE_MIN: f32 = 120.0;
    pub const PLATFORM_RISE_MAX: f32 = 250.0;
    /// Virtual predecessor of the first platform (near the ground)
    pub const FIRST_BASELINE_RISE: f32 = 100.0;

    /// Bonus platforms stacked near a primary one
    pub const BONUS_PLATFORM_CHANCE: f64 = 0.3;
    pub const BONUS_MIN_WIDTH: f32 = 60.0;
    pub const BONUS_MAX_WIDTH: f32 = 120.0;
    pub const BONUS_MAX_X_OFFSET: f32 = 50.0;
    pub const BONUS_MIN_RAISE: f32 = 20.0;
    pub const BONUS_RAISE_HEADROOM: f32 = 10.0;
    /// Bonus platforms never rise above this screen-space top
    pub const BONUS_MIN_TOP: f32 = 50.0;

    /// Collectible (cat) footprint, square
    pub const COLLECTIBLE_SIZE: f32 = 50.0;
    /// Number of cat sprites the renderer provides
    pub const CAT_VARIANT_COUNT: u8 = 6;
    /// Placement attempts before a spawn unit is skipped
    pub const SPAWN_ATTEMPTS: u32 = 10;
    /// Padding added to each side of a placement candidate (6 units of total growth)
    pub const SPAWN_PADDING: f32 = 3.0;
    /// Maximum cats added per respawn round
    pub const MAX_RESPAWN_BATCH: usize = 2;
    /// Cats placed on the ground at world creation
    pub const INITIAL_GROUND_CATS: usize = 3;

    /// Camera follow smoothing (fraction of the remaining distance per tick)
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    /// Ticks each animation frame is held
    pub const FRAME_SPEED: u32 = 10;

    /// Foreground decorations
    pub const FLOWER_SPACING: usize = 140;
    pub const FLOWER_JITTER: f32 = 60.0;
    pub const FLOWER_WIDTH: f32 = 20.0;
    pub const FLOWER_HEIGHT: f32 = 30.0;
    pub const FLOWER_PALETTE_SIZE: u8 = 4;
    pub const BUSH_SPACING: usize = 300;
    pub const BUSH_JITTER: f32 = 50.0;
    pub const BUSH_WIDTH: f32 = 30.0;
    pub const BUSH_HEIGHT: f32 = 20.0;
    /// Bushes sit slightly into the ground
    pub const BUSH_SINK: f32 = 10.0;

    /// Background clouds
    pub const CLOUD_SPACING: usize = 250;
    pub const CLOUD_WRAP_X: f32 = -150.0;
    pub const CLOUD_PARALLAX: f32 = 0.3;
    /// Far, mid and near hill layers
    pub const HILL_PARALLAX: [f32; 3] = [0.15, 0.3, 0.5];
}
