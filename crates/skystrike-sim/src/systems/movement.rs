//! Straight-line kinematics and destruction-boundary checks.

use hecs::World;

use skystrike_core::components::{BoundaryKill, Lifecycle, LinearMotion};
use skystrike_core::enums::{LifecyclePhase, Travel};
use skystrike_core::types::Position;

use crate::systems::lifecycle;

/// Integrate position for all active actors, then remove anything past
/// its destruction threshold. Reacting actors hold still; out-of-bounds
/// removal is direct (no gating animation).
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, motion, lc)) in
        world.query_mut::<(&mut Position, &LinearMotion, &Lifecycle)>()
    {
        if lc.phase != LifecyclePhase::Active {
            continue;
        }
        pos.0 += motion.velocity * dt;
    }

    for (_entity, (pos, bound, lc)) in
        world.query_mut::<(&Position, &BoundaryKill, &mut Lifecycle)>()
    {
        if lc.phase != LifecyclePhase::Active {
            continue;
        }
        let crossed = match bound.travel {
            Travel::Falling => pos.y() < bound.limit_y,
            Travel::Rising => pos.y() > bound.limit_y,
        };
        if crossed {
            lifecycle::mark_removed(lc);
        }
    }
}
