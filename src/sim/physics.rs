//! Player movement and collision resolution
//!
//! Per-tick integration with no acceleration curves: input sets horizontal
//! speed directly, gravity accumulates into vertical speed, and landings snap
//! the player onto the surface below.

use super::rect::Rect;
use super::state::Player;
use super::tick::TickInput;
use super::worldgen::WorldLayout;
use crate::config::GameConfig;
use crate::consts::LANDING_TOLERANCE;

/// What happened to the player this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// A jump was accepted
    pub jumped: bool,
    /// Touched down after being airborne
    pub landed: bool,
}

/// Horizontal velocity for the held directions (right wins a tie)
pub fn input_velocity(input: &TickInput, move_speed: f32) -> f32 {
    if input.right {
        move_speed
    } else if input.left {
        -move_speed
    } else {
        0.0
    }
}

/// Advance the player one tick against the static terrain
pub fn step_player(
    player: &mut Player,
    input: &TickInput,
    layout: &WorldLayout,
    config: &GameConfig,
) -> StepOutcome {
    let was_grounded = player.grounded;

    // Horizontal
    player.vel.x = input_velocity(input, config.move_speed);
    player.rect.x += player.vel.x;

    // Vertical
    player.vel.y += config.gravity;
    player.rect.y += player.vel.y;

    let supported = resolve_landing(player, layout);
    player.grounded = supported;

    let mut outcome = StepOutcome {
        jumped: false,
        landed: supported && !was_grounded,
    };

    if input.jump && player.grounded {
        player.vel.y = config.jump_velocity;
        player.grounded = false;
        outcome.jumped = true;
    }

    clamp_to_world(&mut player.rect, config.world_width);
    outcome
}

/// Snap the player onto the ground or a platform it is landing on
///
/// Returns true if anything is supporting the player.
pub fn resolve_landing(player: &mut Player, layout: &WorldLayout) -> bool {
    let mut supported = false;

    if player.rect.intersects(&layout.ground) {
        land_on(player, &layout.ground);
        supported = true;
    }

    for platform in &layout.platforms {
        if lands_on(&player.rect, player.vel.y, &platform.rect) {
            land_on(player, &platform.rect);
            supported = true;
        }
    }

    supported
}

/// Overlapping a platform only counts as a landing when falling (or still)
/// and the feet were at or just above its top before this tick's fall
fn lands_on(body: &Rect, vel_y: f32, surface: &Rect) -> bool {
    body.intersects(surface)
        && vel_y >= 0.0
        && body.bottom() - vel_y <= surface.top() + LANDING_TOLERANCE
}

fn land_on(player: &mut Player, surface: &Rect) {
    player.rect.set_bottom(surface.top());
    player.vel.y = 0.0;
}

/// Keep the rectangle inside `[0, world_width]` horizontally
pub fn clamp_to_world(rect: &mut Rect, world_width: f32) {
    if rect.left() < 0.0 {
        rect.x = 0.0;
    }
    if rect.right() > world_width {
        rect.set_right(world_width);
    }
}
