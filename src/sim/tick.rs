//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Step order is
//! fixed: input, physics, collection, respawn, camera, animation, scenery.

use super::occupancy::RegionId;
use super::physics::step_player;
use super::rect::Rect;
use super::spawner;
use super::state::{GameEvent, GameState, Population};

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump (only honored while grounded)
    pub jump: bool,
    /// Host asked to exit; stops the simulation immediately
    pub quit: bool,
}

/// Advance the game state by one fixed tick
///
/// Returns false once the simulation has stopped.
pub fn tick(state: &mut GameState, input: &TickInput) -> bool {
    if !state.running {
        return false;
    }
    if input.quit {
        log::info!(
            "Quit after {} ticks with {} cats collected",
            state.time_ticks,
            state.collected_count
        );
        state.running = false;
        return false;
    }

    state.events.clear();
    state.time_ticks += 1;

    // Physics only sees the terrain
    let outcome = step_player(&mut state.player, input, &state.layout, &state.config);
    if outcome.jumped {
        state.events.push(GameEvent::Jumped);
    }
    if outcome.landed {
        state.events.push(GameEvent::Landed);
    }

    // Collection
    let collected = collect_overlapping(&mut state.population, &state.player.rect);
    state.collected_count += collected.len() as u32;
    state.events.extend(collected);

    // Respawn bookkeeping
    if spawner::respawn_due(&mut state.spawn_timer, &state.config) {
        let spawned = spawner::respawn(
            &mut state.population,
            &state.layout,
            &state.config,
            &mut state.rng,
        );
        state
            .events
            .extend(spawned.into_iter().map(|id| GameEvent::CatSpawned { id }));
    }

    state
        .camera
        .update(state.player.rect.center_x(), &state.config);

    state.frame = state
        .player
        .animator
        .update(state.player.grounded, state.player.vel.x, &state.frames);

    for cloud in &mut state.clouds {
        cloud.drift(state.config.world_width);
    }

    true
}

/// Mark every uncollected cat the player touches as collected and free its spot
///
/// Scans a snapshot of the active cats first, then applies the changes.
pub fn collect_overlapping(population: &mut Population, player: &Rect) -> Vec<GameEvent> {
    let hits: Vec<(usize, RegionId)> = population
        .collectibles
        .iter()
        .enumerate()
        .filter(|(_, cat)| !cat.collected && cat.rect.intersects(player))
        .map(|(idx, cat)| (idx, cat.region))
        .collect();

    let mut events = Vec::with_capacity(hits.len());
    for (idx, region) in hits {
        let cat = &mut population.collectibles[idx];
        cat.collected = true;
        events.push(GameEvent::CatCollected {
            id: cat.id,
            variant: cat.variant,
        });
        population.registry.release(region);
        log::debug!("Collected cat {}", cat.id);
    }
    events
}
