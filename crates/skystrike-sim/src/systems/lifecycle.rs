//! Actor lifecycle transitions: Active -> Reacting -> Removed.
//!
//! Every path into `Removed` funnels through `mark_removed`, which is
//! idempotent via `removal_pending`. The gating-animation-finished
//! notification and the fallback timer race each other; whichever fires
//! first wins and the loser is a no-op.

use hecs::{Entity, World};

use skystrike_core::components::{Enemy, Lifecycle};
use skystrike_core::constants::REMOVAL_SLACK;
use skystrike_core::enums::LifecyclePhase;
use skystrike_core::events::{AudioEvent, UiEvent};

use crate::engine::ScoreState;

/// Begin the actor's hit/pickup reaction. Returns false if the actor was
/// not `Active` (re-entry attempts are no-ops).
///
/// With a gating animation configured this enters `Reacting` and arms the
/// fallback removal timer; without one the actor goes straight to
/// `Removed`. Leaving `Active` also cuts off collision response: contact
/// registration only accepts `Active` actors.
pub fn enter_reacting(lc: &mut Lifecycle) -> bool {
    if lc.phase != LifecyclePhase::Active {
        return false;
    }
    match lc.gate_secs {
        Some(gate) => {
            lc.phase = LifecyclePhase::Reacting;
            lc.fallback_remaining = Some(gate.max(0.0) + REMOVAL_SLACK);
        }
        None => {
            mark_removed(lc);
        }
    }
    true
}

/// Final transition into `Removed`. Returns false if removal was already
/// pending; every later trigger (fallback timer, animation notification,
/// boundary exit) short-circuits here.
pub fn mark_removed(lc: &mut Lifecycle) -> bool {
    if lc.removal_pending {
        return false;
    }
    lc.removal_pending = true;
    lc.phase = LifecyclePhase::Removed;
    lc.fallback_remaining = None;
    true
}

/// Request removal of another actor by handle. Absorbs stale handles:
/// removing a body that is already gone is a no-op, not an error.
pub fn request_removal(world: &mut World, entity: Entity) {
    if let Ok(mut lc) = world.get::<&mut Lifecycle>(entity) {
        mark_removed(&mut lc);
    }
}

/// Force an enemy into its death sequence. Used by lethal damage, player
/// ramming, and the bomb clear-screen. Awards the kill score exactly once;
/// an enemy already reacting or removed is left alone.
pub fn enemy_down(
    world: &mut World,
    entity: Entity,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let points = match world.query_one_mut::<(&Enemy, &mut Lifecycle)>(entity) {
        Ok((enemy, lc)) => {
            if !enter_reacting(lc) {
                return;
            }
            enemy.score
        }
        Err(_) => return,
    };

    score.score += points;
    ui_events.push(UiEvent::ScoreChanged { score: score.score });
    audio_events.push(AudioEvent::EnemyDown);
}

/// Tick the fallback removal timers of all reacting actors.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, lc) in world.query_mut::<&mut Lifecycle>() {
        let Some(remaining) = lc.fallback_remaining else {
            continue;
        };
        if lc.removal_pending {
            lc.fallback_remaining = None;
            continue;
        }
        let left = remaining - dt;
        if left <= 0.0 {
            mark_removed(lc);
        } else {
            lc.fallback_remaining = Some(left);
        }
    }
}
