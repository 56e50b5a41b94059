//! Read-only view of the world for the renderer and HUD
//!
//! Built once per tick after [`super::tick`]. Everything is in world space;
//! the renderer subtracts `camera_offset` (scaled by a parallax factor for
//! background layers) to get draw positions.

use serde::Serialize;

use super::animation::Frame;
use super::rect::Rect;
use super::state::{CatVariant, GameState};
use crate::consts::{CLOUD_PARALLAX, HILL_PARALLAX};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub frame: Frame,
    /// Mirror the sprite horizontally
    pub flip: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectibleView {
    pub rect: Rect,
    pub variant: CatVariant,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowerView {
    pub x: f32,
    pub y: f32,
    pub phase: f32,
    pub color: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CloudView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub shape_seed: u32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub camera_offset: f32,
    pub player: PlayerView,
    pub ground: Rect,
    pub platforms: Vec<Rect>,
    pub collectibles: Vec<CollectibleView>,
    pub flowers: Vec<FlowerView>,
    pub bushes: Vec<Rect>,
    pub clouds: Vec<CloudView>,
    /// HUD counter
    pub collected_count: u32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            camera_offset: state.camera.offset_x,
            player: PlayerView {
                rect: state.player.rect,
                frame: state.frame,
                flip: state.player.flip(),
            },
            ground: state.layout.ground,
            platforms: state.layout.platforms.iter().map(|p| p.rect).collect(),
            collectibles: state
                .population
                .collectibles
                .iter()
                .map(|c| CollectibleView {
                    rect: c.rect,
                    variant: c.variant,
                    visible: !c.collected,
                })
                .collect(),
            flowers: state
                .population
                .flowers
                .iter()
                .map(|f| FlowerView {
                    x: f.x,
                    y: f.y,
                    phase: f.phase,
                    color: f.color,
                })
                .collect(),
            bushes: state.population.bushes.iter().map(|b| b.rect).collect(),
            clouds: state
                .clouds
                .iter()
                .map(|c| CloudView {
                    x: c.x,
                    y: c.y,
                    width: c.width,
                    height: c.height,
                    shape_seed: c.shape_seed,
                })
                .collect(),
            collected_count: state.collected_count,
        }
    }

    /// World x to draw-space x for foreground entities
    #[inline]
    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x - self.camera_offset
    }

    /// Draw offset for a background layer scrolling at `factor` of camera speed
    #[inline]
    pub fn parallax_offset(&self, factor: f32) -> f32 {
        -self.camera_offset * factor
    }

    /// Draw-space x of a cloud
    pub fn cloud_screen_x(&self, cloud: &CloudView) -> f32 {
        cloud.x + self.parallax_offset(CLOUD_PARALLAX)
    }

    /// Draw offsets for the far, mid and near hill layers
    pub fn hill_offsets(&self) -> [f32; 3] {
        HILL_PARALLAX.map(|factor| self.parallax_offset(factor))
    }

    /// Uncollected cats
    pub fn visible_collectibles(&self) -> impl Iterator<Item = &CollectibleView> {
        self.collectibles.iter().filter(|c| c.visible)
    }
}

impl GameState {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
