//! Procedural level layout
//!
//! Walks a cursor across the world dropping primary platforms whose heights
//! are always within jump range of the previous one, and occasionally stacks a
//! smaller bonus platform next to them when it fits cleanly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::*;

/// How a platform came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// On the main path; reachable from the previous primary platform
    Primary,
    /// Optional extra stacked near a primary platform
    Bonus,
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

/// Generated terrain: the full-width ground strip plus platforms in generation order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldLayout {
    pub ground: Rect,
    pub platforms: Vec<Platform>,
}

impl WorldLayout {
    /// Every surface a cat can stand on, ground last
    pub fn surfaces(&self) -> impl Iterator<Item = &Rect> {
        self.platforms
            .iter()
            .map(|p| &p.rect)
            .chain(std::iter::once(&self.ground))
    }

    /// Number of surfaces (platforms plus the ground)
    pub fn surface_count(&self) -> usize {
        self.platforms.len() + 1
    }

    /// Surface by index, where `platforms.len()` is the ground
    pub fn surface(&self, index: usize) -> &Rect {
        self.platforms
            .get(index)
            .map(|p| &p.rect)
            .unwrap_or(&self.ground)
    }

    pub fn primary_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms
            .iter()
            .filter(|p| p.kind == PlatformKind::Primary)
    }
}

/// Build the ground strip and the platform list
pub fn generate_world<R: Rng>(config: &GameConfig, rng: &mut R) -> WorldLayout {
    let ground = Rect::new(0.0, config.ground_top(), config.world_width, GROUND_HEIGHT);
    let max_jump = config.max_jump_height();

    let mut platforms: Vec<Platform> = Vec::new();
    let mut last_top = config.viewport_height - FIRST_BASELINE_RISE;
    let mut x = PLATFORM_START_X;
    let end_x = config.world_width - PLATFORM_END_MARGIN;

    while x < end_x {
        let width = rng.random_range(config.min_platform_width..=config.max_platform_width);
        let rise = rng.random_range(PLATFORM_RISE_MIN..=PLATFORM_RISE_MAX);
        let top = clamp_reachable(config.viewport_height - rise, last_top, max_jump);

        platforms.push(Platform {
            rect: Rect::new(x, top, width, PLATFORM_THICKNESS),
            kind: PlatformKind::Primary,
        });

        if rng.random_bool(BONUS_PLATFORM_CHANCE) {
            let next_primary_x = x + width + config.min_gap;
            if let Some(bonus) = bonus_candidate(config, rng, x, top, max_jump) {
                if bonus.right() <= next_primary_x
                    && fits_among(&bonus, &platforms, config.min_vertical_gap)
                {
                    platforms.push(Platform {
                        rect: bonus,
                        kind: PlatformKind::Bonus,
                    });
                }
            }
        }

        last_top = top;
        x += width + rng.random_range(config.min_gap..=config.max_gap);
    }

    let bonus_count = platforms
        .iter()
        .filter(|p| p.kind == PlatformKind::Bonus)
        .count();
    log::info!(
        "Generated {} platforms ({} bonus) across {} units, max jump {:.1}",
        platforms.len(),
        bonus_count,
        config.world_width,
        max_jump
    );

    WorldLayout { ground, platforms }
}

/// Pull `top` toward `previous_top` so the two differ by at most `max_jump`
pub fn clamp_reachable(top: f32, previous_top: f32, max_jump: f32) -> f32 {
    top.clamp(previous_top - max_jump, previous_top + max_jump)
}

fn bonus_candidate<R: Rng>(
    config: &GameConfig,
    rng: &mut R,
    x: f32,
    primary_top: f32,
    max_jump: f32,
) -> Option<Rect> {
    let max_raise = max_jump - BONUS_RAISE_HEADROOM;
    if max_raise < BONUS_MIN_RAISE {
        return None;
    }

    let width = rng.random_range(BONUS_MIN_WIDTH..=BONUS_MAX_WIDTH);
    let offset_x = rng.random_range(-BONUS_MAX_X_OFFSET..=BONUS_MAX_X_OFFSET);
    let raise = rng.random_range(BONUS_MIN_RAISE..=max_raise);

    let bonus_x = (x + offset_x).min(config.world_width - width).max(0.0);
    let bonus_top = (primary_top - raise).max(BONUS_MIN_TOP);

    Some(Rect::new(bonus_x, bonus_top, width, PLATFORM_THICKNESS))
}

/// A bonus platform fits if it overlaps nothing and keeps `min_gap` between
/// its horizontal edges and every other platform's
fn fits_among(candidate: &Rect, platforms: &[Platform], min_gap: f32) -> bool {
    platforms.iter().all(|p| {
        !candidate.intersects(&p.rect)
            && (candidate.top() - p.rect.bottom()).abs() >= min_gap
            && (candidate.bottom() - p.rect.top()).abs() >= min_gap
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn tall_jump_config() -> GameConfig {
        // max jump 75: leaves a real raise band for bonus platforms
        GameConfig {
            jump_velocity: -40.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_clamp_reachable() {
        assert_eq!(clamp_reachable(200.0, 300.0, 30.0), 270.0);
        assert_eq!(clamp_reachable(340.0, 300.0, 30.0), 330.0);
        assert_eq!(clamp_reachable(310.0, 300.0, 30.0), 310.0);
    }

    #[test]
    fn test_layout_spans_world() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let layout = generate_world(&config, &mut rng);

        assert_eq!(layout.ground, Rect::new(0.0, 390.0, 4000.0, GROUND_HEIGHT));
        let primaries: Vec<_> = layout.primary_platforms().collect();
        assert!(!primaries.is_empty());
        assert_eq!(primaries[0].rect.left(), PLATFORM_START_X);
        for p in &primaries {
            assert!(p.rect.left() < config.world_width - PLATFORM_END_MARGIN);
            assert!(p.rect.bottom() < layout.ground.top());
        }
        for pair in primaries.windows(2) {
            let advance = pair[1].rect.left() - pair[0].rect.left();
            assert!(advance >= config.min_platform_width + config.min_gap - 1e-3);
        }
    }

    #[test]
    fn test_primary_platforms_reachable() {
        let config = tall_jump_config();
        let max_jump = config.max_jump_height();
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let layout = generate_world(&config, &mut rng);
            let mut previous = config.viewport_height - FIRST_BASELINE_RISE;
            for p in layout.primary_platforms() {
                assert!((p.rect.top() - previous).abs() <= max_jump + 1e-3);
                previous = p.rect.top();
            }
        }
    }

    #[test]
    fn test_bonus_platforms_appear_and_fit() {
        let config = tall_jump_config();
        let mut total_bonus = 0;
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let layout = generate_world(&config, &mut rng);
            total_bonus += layout
                .platforms
                .iter()
                .filter(|p| p.kind == PlatformKind::Bonus)
                .count();

            for (i, a) in layout.platforms.iter().enumerate() {
                for b in &layout.platforms[i + 1..] {
                    assert!(!a.rect.intersects(&b.rect));
                }
            }
        }
        assert!(total_bonus > 0, "expected at least one bonus platform in 50 worlds");
    }

    #[test]
    fn test_default_jump_leaves_no_room_for_bonus() {
        // raise band is exactly [20, 20], which always violates the 20 unit edge gap
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let layout = generate_world(&config, &mut rng);
        assert_eq!(layout.primary_platforms().count(), layout.platforms.len());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GameConfig::default();
        let a = generate_world(&config, &mut Pcg32::seed_from_u64(42));
        let b = generate_world(&config, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a.platforms, b.platforms);
    }

    #[test]
    fn test_surface_index_ground_last() {
        let config = GameConfig::default();
        let layout = generate_world(&config, &mut Pcg32::seed_from_u64(1));
        assert_eq!(layout.surface_count(), layout.platforms.len() + 1);
        assert_eq!(*layout.surface(layout.platforms.len()), layout.ground);
        assert_eq!(layout.surfaces().count(), layout.surface_count());
    }
}
