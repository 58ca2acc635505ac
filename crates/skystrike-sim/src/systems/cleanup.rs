//! Cleanup system: despawns actors whose removal is pending.

use hecs::{Entity, World};

use skystrike_core::components::Lifecycle;

/// Despawn every actor with a pending removal.
/// Uses a pre-allocated buffer to avoid per-tick allocation; despawning
/// an entity that is already gone is silently ignored.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, lc) in world.query_mut::<&Lifecycle>() {
        if lc.removal_pending {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
