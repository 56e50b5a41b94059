//! Side-scrolling camera with smoothed follow

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::CAMERA_SMOOTHING;

/// Horizontal viewport offset into the world
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset_x: f32,
}

impl Camera {
    /// Ease toward centering the player, never showing past the world edges
    pub fn update(&mut self, player_center_x: f32, config: &GameConfig) {
        let target = player_center_x - config.viewport_width / 2.0;
        self.offset_x += (target - self.offset_x) * CAMERA_SMOOTHING;
        self.offset_x = self.offset_x.clamp(0.0, config.max_camera_offset());
    }
}
