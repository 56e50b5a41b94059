//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable iteration order (generation / spawn order)
//! - No rendering, audio or platform dependencies

pub mod animation;
pub mod backdrop;
pub mod camera;
pub mod occupancy;
pub mod physics;
pub mod rect;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod worldgen;

pub use animation::{AnimState, AnimationFrames, Animator, Frame, FrameId};
pub use camera::Camera;
pub use occupancy::{OccupancyRegistry, RegionId};
pub use rect::Rect;
pub use snapshot::RenderSnapshot;
pub use state::{CatVariant, Collectible, GameEvent, GameState, Player, Population};
pub use tick::{TickInput, tick};
pub use worldgen::{Platform, PlatformKind, WorldLayout, generate_world};
