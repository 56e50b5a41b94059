//! World constants
//!
//! Loaded once at startup (optionally from JSON) and read-only afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_HEIGHT, JUMP_HEIGHT_MARGIN, MAX_WORLD_WIDTH, PLATFORM_RISE_MAX};
use crate::error::ConfigError;

/// Tunable world options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    // === World ===
    /// Total scrollable width
    pub world_width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Physics (per tick) ===
    /// Downward acceleration added to vertical velocity each tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,

    // === Generation ===
    pub min_platform_width: f32,
    pub max_platform_width: f32,
    pub min_gap: f32,
    pub max_gap: f32,
    /// Clearance between any two platforms' horizontal edges
    pub min_vertical_gap: f32,

    // === Spawning ===
    /// Ceiling for uncollected cats before respawning stops
    pub max_active_collectibles: usize,
    /// Ticks between respawn rounds
    pub spawn_interval_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 4000.0,
            viewport_width: 800.0,
            viewport_height: 450.0,

            gravity: 0.8,
            jump_velocity: -16.0,
            move_speed: 3.0,

            min_platform_width: 80.0,
            max_platform_width: 150.0,
            min_gap: 100.0,
            max_gap: 250.0,
            min_vertical_gap: 20.0,

            max_active_collectibles: 8,
            spawn_interval_ticks: 200,
        }
    }
}

impl GameConfig {
    /// Highest rise world generation allows between consecutive platforms
    pub fn max_jump_height(&self) -> f32 {
        (self.jump_velocity * JUMP_HEIGHT_MARGIN / self.gravity).abs()
    }

    /// Screen-space y of the ground's top edge
    pub fn ground_top(&self) -> f32 {
        self.viewport_height - GROUND_HEIGHT
    }

    /// Rightmost camera offset
    pub fn max_camera_offset(&self) -> f32 {
        self.world_width - self.viewport_width
    }

    /// Check every option; the game must refuse to start on error
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("worldWidth", self.world_width)?;
        positive("viewportWidth", self.viewport_width)?;
        positive("viewportHeight", self.viewport_height)?;
        positive("gravity", self.gravity)?;
        positive("moveSpeed", self.move_speed)?;
        positive("minPlatformWidth", self.min_platform_width)?;
        non_negative("minGap", self.min_gap)?;
        non_negative("minVerticalGap", self.min_vertical_gap)?;

        if self.world_width > MAX_WORLD_WIDTH {
            return Err(ConfigError::InvalidValue {
                field: "worldWidth",
                value: self.world_width as f64,
                reason: "exceeds the widest supported world (16777216)",
            });
        }
        // Each generated platform moves the cursor by at least this much
        if self.min_platform_width + self.min_gap < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "minPlatformWidth",
                value: self.min_platform_width as f64,
                reason: "minPlatformWidth + minGap must be at least 1",
            });
        }

        if !self.jump_velocity.is_finite() || self.jump_velocity >= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "jumpVelocity",
                value: self.jump_velocity as f64,
                reason: "must be negative (upward)",
            });
        }

        ordered(
            ("minPlatformWidth", self.min_platform_width),
            ("maxPlatformWidth", self.max_platform_width),
        )?;
        ordered(("minGap", self.min_gap), ("maxGap", self.max_gap))?;
        ordered(
            ("viewportWidth", self.viewport_width),
            ("worldWidth", self.world_width),
        )?;

        if self.viewport_height <= PLATFORM_RISE_MAX {
            return Err(ConfigError::InvalidValue {
                field: "viewportHeight",
                value: self.viewport_height as f64,
                reason: "must leave room for the platform rise band",
            });
        }
        if self.spawn_interval_ticks == 0 {
            return Err(ConfigError::InvalidValue {
                field: "spawnIntervalTicks",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value: value as f64,
            reason: "must be positive",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value: value as f64,
            reason: "must not be negative",
        })
    }
}

fn ordered(min: (&'static str, f32), max: (&'static str, f32)) -> Result<(), ConfigError> {
    if min.1 <= max.1 {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange {
            min_field: min.0,
            min: min.1 as f64,
            max_field: max.0,
            max: max.1 as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.max_jump_height() - 30.0).abs() < 1e-4);
        assert_eq!(config.ground_top(), 390.0);
    }

    #[test]
    fn test_rejects_bad_physics() {
        let config = GameConfig {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "gravity", .. })
        ));

        let config = GameConfig {
            jump_velocity: 4.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            viewport_width: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let config = GameConfig {
            min_gap: 300.0,
            max_gap: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { min_field: "minGap", .. })
        ));

        let config = GameConfig {
            world_width: 500.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_world_too_wide_to_generate() {
        let err = GameConfig::from_json_str(r#"{ "worldWidth": 1e10 }"#);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue { field: "worldWidth", .. })
        ));

        let widest = GameConfig {
            world_width: MAX_WORLD_WIDTH,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());

        // At the widest accepted world the cursor still moves every step
        let x = MAX_WORLD_WIDTH - 1.0;
        assert!(x + widest.min_platform_width + widest.min_gap > x);
    }

    #[test]
    fn test_rejects_stalled_platform_cursor() {
        let config = GameConfig {
            min_platform_width: 0.25,
            min_gap: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "minPlatformWidth", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "worldWidth": 6000, "gravity": 1.0 }"#)
            .expect("valid config");
        assert_eq!(config.world_width, 6000.0);
        assert_eq!(config.gravity, 1.0);
        assert_eq!(config.viewport_width, 800.0);
    }

    #[test]
    fn test_json_validation_runs() {
        let err = GameConfig::from_json_str(r#"{ "spawnIntervalTicks": 0 }"#);
        assert!(err.is_err());
        let err = GameConfig::from_json_str("not json");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }
}
