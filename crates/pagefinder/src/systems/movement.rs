//! Actor movement step: input, gravity, integration and per-platform
//! penetration resolution, followed by the movement-state transition.
//!
//! One call is one tick. The actor is moved by its full velocity first and
//! then pushed out of each platform in level order, one pixel at a time.
//! Vertical contact is classified before horizontal contact for every
//! platform, and the grounded/falling flags are re-evaluated after each
//! platform rather than once at the end, so the order platforms were built
//! in is observable.

use crate::components::entity::Entity;
use crate::core::collision::{horizontal_hit, resolve, vertical_hit, Hit};
use crate::core::geometry::collider;
use crate::game::config::MovementParams;
use crate::input::snapshot::InputSnapshot;

/// What happened during one movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// A jump started this tick.
    pub jumped: bool,
    /// Number of platforms landed on this tick (one bump cue each).
    pub landings: u32,
    /// Any directional contact was resolved.
    pub collided: bool,
    /// A resolution pass ran out of steps and left the actor overlapping.
    pub stuck: bool,
}

/// Advance the actor one tick against a level's platforms.
///
/// `platforms` is the active level's slice in build order. Entities without
/// actor state are left untouched.
pub fn step_actor(
    actor: &mut Entity,
    platforms: &[Entity],
    input: &InputSnapshot,
    dt: f32,
    params: &MovementParams,
) -> StepReport {
    let mut state = match actor.actor() {
        Some(state) => *state,
        None => return StepReport::default(),
    };
    let mut report = StepReport::default();

    // Jump on the press edge, only from the ground. The latch is released
    // once the button is up while grounded.
    if !state.jump_held && !state.jumping && !state.falling && input.jump {
        state.jump_held = true;
        state.jumping = true;
        state.walking = false;
        state.falling = false;
        actor.vel.y -= params.jump_impulse;
        report.jumped = true;
    } else if state.jump_held && !state.jumping && !state.falling && !input.jump {
        state.jump_held = false;
    }

    if input.left {
        state.walking = true;
        actor.vel.x = -params.walk_speed * dt;
        actor.sprite.flipped = true;
    } else if input.right {
        state.walking = true;
        actor.vel.x = params.walk_speed * dt;
        actor.sprite.flipped = false;
    } else {
        state.walking = false;
        actor.vel.x = 0.0;
    }

    if (state.falling || state.jumping) && actor.vel.y < params.max_fall_speed {
        actor.vel.y += params.gravity_step(dt);
    }
    actor.pos += actor.vel;

    // Accumulates over the whole pass; a contact with an earlier platform
    // keeps later iterations from forcing a fall.
    let mut has_collided = false;

    for platform in platforms {
        let solid = collider(platform);

        match vertical_hit(&collider(actor), &solid, params.edge_padding) {
            Some(Hit::Below) => {
                report.landings += 1;
                has_collided = true;
                let res = resolve(actor, &solid, Hit::Below.push_direction(), params.max_resolve_steps);
                report.stuck |= res.capped;
                actor.vel.y = 0.0;
                state.jumping = false;
                state.falling = false;
            }
            Some(hit) => {
                has_collided = true;
                let res = resolve(actor, &solid, hit.push_direction(), params.max_resolve_steps);
                report.stuck |= res.capped;
                actor.vel.y = 0.0;
                state.jumping = false;
                state.falling = true;
            }
            None => {}
        }

        if let Some(hit) = horizontal_hit(&collider(actor), &solid, params.edge_padding) {
            has_collided = true;
            let res = resolve(actor, &solid, hit.push_direction(), params.max_resolve_steps);
            report.stuck |= res.capped;
            actor.vel.x = 0.0;
        }

        if !has_collided && state.walking {
            state.falling = true;
        }
        if state.jumping && actor.vel.y > 0.0 {
            state.jumping = false;
            state.falling = true;
        }
    }

    report.collided = has_collided;
    actor.animation.play(state.movement_state().animation_index());
    if let Some(slot) = actor.actor_mut() {
        *slot = state;
    }
    report
}
