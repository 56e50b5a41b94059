//! Entity placement
//!
//! Cats, flowers and bushes all go through the same routine: try a handful of
//! random spots, keep the first one the occupancy registry accepts, and give up
//! quietly if none fit.

use std::f32::consts::TAU;

use rand::Rng;

use super::occupancy::RegionId;
use super::rect::Rect;
use super::state::{Bush, CatVariant, Collectible, Flower, Population};
use super::worldgen::WorldLayout;
use crate::config::GameConfig;
use crate::consts::*;

/// Try up to [`SPAWN_ATTEMPTS`] candidates; register and return the first that fits
fn place_with_retries<R, F>(
    population: &mut Population,
    rng: &mut R,
    mut candidate: F,
) -> Option<(Rect, RegionId)>
where
    R: Rng,
    F: FnMut(&mut R) -> Rect,
{
    for _ in 0..SPAWN_ATTEMPTS {
        let rect = candidate(rng);
        if population
            .registry
            .can_place(&rect, SPAWN_PADDING, &population.collectibles)
        {
            let region = population.registry.register(rect);
            return Some((rect, region));
        }
    }
    None
}

/// Place up to `count` cats standing on `surface`, returning the IDs spawned
pub fn spawn_on_surface<R: Rng>(
    population: &mut Population,
    surface: &Rect,
    count: usize,
    rng: &mut R,
) -> Vec<u32> {
    let mut spawned = Vec::new();
    if surface.width < COLLECTIBLE_SIZE {
        return spawned;
    }

    let max_offset = surface.width - COLLECTIBLE_SIZE;
    for _ in 0..count {
        let placed = place_with_retries(population, rng, |rng| {
            let x = surface.left() + rng.random_range(0.0..=max_offset);
            Rect::standing_on(x, surface.top(), COLLECTIBLE_SIZE, COLLECTIBLE_SIZE)
        });

        match placed {
            Some((rect, region)) => {
                let id = population.next_cat_id();
                population.collectibles.push(Collectible {
                    id,
                    rect,
                    variant: CatVariant(rng.random_range(0..CAT_VARIANT_COUNT)),
                    region,
                    collected: false,
                });
                spawned.push(id);
            }
            None => {
                log::debug!(
                    "No room for a cat on surface at x={:.0} after {} attempts",
                    surface.left(),
                    SPAWN_ATTEMPTS
                );
            }
        }
    }
    spawned
}

/// Ticks down to the next respawn round
pub fn respawn_due(spawn_timer: &mut u32, config: &GameConfig) -> bool {
    *spawn_timer += 1;
    if *spawn_timer >= config.spawn_interval_ticks {
        *spawn_timer = 0;
        true
    } else {
        false
    }
}

/// Top up the cat population toward the configured ceiling
///
/// Adds at most [`MAX_RESPAWN_BATCH`] cats, each on a uniformly chosen
/// surface (platforms and ground alike).
pub fn respawn<R: Rng>(
    population: &mut Population,
    layout: &WorldLayout,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<u32> {
    let active = population.active_count();
    if active >= config.max_active_collectibles {
        return Vec::new();
    }

    let wanted = MAX_RESPAWN_BATCH.min(config.max_active_collectibles - active);
    let mut spawned = Vec::new();
    for _ in 0..wanted {
        let surface = *layout.surface(rng.random_range(0..layout.surface_count()));
        spawned.extend(spawn_on_surface(population, &surface, 1, rng));
    }

    log::debug!(
        "Respawn round: {} active, wanted {}, spawned {}",
        active,
        wanted,
        spawned.len()
    );
    spawned
}

/// One flower per column along the ground, where there is room
pub fn place_flowers<R: Rng>(population: &mut Population, config: &GameConfig, rng: &mut R) {
    let ground_top = config.ground_top();
    for column in (0..config.world_width as usize).step_by(FLOWER_SPACING) {
        let placed = place_with_retries(population, rng, |rng| {
            let x = column as f32 + rng.random_range(0.0..=FLOWER_JITTER);
            Rect::standing_on(x - FLOWER_WIDTH / 2.0, ground_top, FLOWER_WIDTH, FLOWER_HEIGHT)
        });

        if let Some((rect, _)) = placed {
            population.flowers.push(Flower {
                x: rect.center_x(),
                y: ground_top,
                phase: rng.random_range(0.0..TAU),
                color: rng.random_range(0..FLOWER_PALETTE_SIZE),
                rect,
            });
        }
    }
}

/// One bush per column, sunk slightly into the ground
pub fn place_bushes<R: Rng>(population: &mut Population, config: &GameConfig, rng: &mut R) {
    let bush_top = config.ground_top() - BUSH_SINK;
    for column in (0..config.world_width as usize).step_by(BUSH_SPACING) {
        let placed = place_with_retries(population, rng, |rng| {
            let x = column as f32 + rng.random_range(0.0..=BUSH_JITTER);
            Rect::new(x, bush_top, BUSH_WIDTH, BUSH_HEIGHT)
        });

        if let Some((rect, _)) = placed {
            population.bushes.push(Bush { rect });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::worldgen::{Platform, PlatformKind};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ground() -> Rect {
        Rect::new(0.0, 390.0, 4000.0, GROUND_HEIGHT)
    }

    fn claims_disjoint(population: &Population) -> bool {
        let regions: Vec<_> = population.registry.regions().copied().collect();
        regions
            .iter()
            .enumerate()
            .all(|(i, a)| regions[i + 1..].iter().all(|b| !a.intersects(b)))
    }

    #[test]
    fn test_cats_rest_on_surface() {
        let mut population = Population::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let platform = Rect::new(600.0, 250.0, 120.0, PLATFORM_THICKNESS);

        let ids = spawn_on_surface(&mut population, &platform, 1, &mut rng);
        assert_eq!(ids.len(), 1);
        let cat = &population.collectibles[0];
        assert_eq!(cat.rect.bottom(), platform.top());
        assert!(cat.rect.left() >= platform.left());
        assert!(cat.rect.right() <= platform.right());
        assert!(cat.variant.0 < CAT_VARIANT_COUNT);
        assert!(population.registry.contains(cat.region));
    }

    #[test]
    fn test_narrow_surface_spawns_nothing() {
        let mut population = Population::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let sliver = Rect::new(0.0, 200.0, COLLECTIBLE_SIZE - 1.0, PLATFORM_THICKNESS);
        assert!(spawn_on_surface(&mut population, &sliver, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_crowded_surface_skips_silently() {
        let mut population = Population::new();
        let mut rng = Pcg32::seed_from_u64(2);
        // Just wide enough for one padded cat
        let platform = Rect::new(0.0, 200.0, 60.0, PLATFORM_THICKNESS);
        let ids = spawn_on_surface(&mut population, &platform, 5, &mut rng);
        assert_eq!(ids.len(), 1);
        assert_eq!(population.collectibles.len(), 1);
    }

    #[test]
    fn test_ground_spawns_never_overlap() {
        let mut population = Population::new();
        let mut rng = Pcg32::seed_from_u64(3);
        spawn_on_surface(&mut population, &ground(), 30, &mut rng);
        assert!(population.collectibles.len() > 10);
        assert!(claims_disjoint(&population));
    }

    #[test]
    fn test_decorations_avoid_cats() {
        let config = GameConfig::default();
        let mut population = Population::new();
        let mut rng = Pcg32::seed_from_u64(4);
        spawn_on_surface(&mut population, &ground(), 3, &mut rng);
        place_flowers(&mut population, &config, &mut rng);
        place_bushes(&mut population, &config, &mut rng);

        assert!(!population.flowers.is_empty());
        assert!(!population.bushes.is_empty());
        assert!(claims_disjoint(&population));
        for flower in &population.flowers {
            assert_eq!(flower.rect.bottom(), config.ground_top());
            assert!(flower.color < FLOWER_PALETTE_SIZE);
        }
        for bush in &population.bushes {
            assert_eq!(bush.rect.top(), config.ground_top() - BUSH_SINK);
        }
    }

    #[test]
    fn test_respawn_due_every_interval() {
        let config = GameConfig {
            spawn_interval_ticks: 3,
            ..Default::default()
        };
        let mut timer = 0;
        let due: Vec<bool> = (0..6).map(|_| respawn_due(&mut timer, &config)).collect();
        assert_eq!(due, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_respawn_caps_batch_and_ceiling() {
        let config = GameConfig {
            max_active_collectibles: 3,
            ..Default::default()
        };
        let layout = WorldLayout {
            ground: ground(),
            platforms: vec![Platform {
                rect: Rect::new(600.0, 250.0, 150.0, PLATFORM_THICKNESS),
                kind: PlatformKind::Primary,
            }],
        };
        let mut population = Population::new();
        let mut rng = Pcg32::seed_from_u64(9);

        let first = respawn(&mut population, &layout, &config, &mut rng);
        assert!(first.len() <= MAX_RESPAWN_BATCH);
        let second = respawn(&mut population, &layout, &config, &mut rng);
        assert!(population.active_count() <= 3);
        assert!(first.len() + second.len() <= 3);

        // At the ceiling nothing more spawns
        while population.active_count() < 3 {
            respawn(&mut population, &layout, &config, &mut rng);
        }
        assert!(respawn(&mut population, &layout, &config, &mut rng).is_empty());
    }
}
