//! Player weapon scheduling and protection/upgrade timers.

use glam::Vec2;
use hecs::World;

use skystrike_core::components::{Lifecycle, PlayerCraft};
use skystrike_core::constants::{FIRE_OFFSET_X_LV2, FIRE_OFFSET_Y};
use skystrike_core::enums::{LifecyclePhase, WeaponLevel};
use skystrike_core::events::AudioEvent;
use skystrike_core::types::{PlayArea, Position};

use crate::world_setup;

/// Decay the invincibility and upgrade timers, then emit bullets at the
/// fixed fire rate. The accumulator carries its remainder across frames,
/// so a stalled frame fires the bullets it owes.
pub fn run(world: &mut World, dt: f32, audio_events: &mut Vec<AudioEvent>, play_area: &PlayArea) {
    let mut muzzles: Vec<Vec2> = Vec::new();
    let mut shots = 0u32;

    for (_entity, (craft, pos, lc)) in
        world.query_mut::<(&mut PlayerCraft, &Position, &Lifecycle)>()
    {
        if craft.invincible_remaining > 0.0 {
            craft.invincible_remaining = (craft.invincible_remaining - dt).max(0.0);
        }
        if craft.level_up_remaining > 0.0 {
            craft.level_up_remaining = (craft.level_up_remaining - dt).max(0.0);
            if craft.level_up_remaining <= 0.0 && craft.weapon_level == WeaponLevel::Level2 {
                craft.weapon_level = WeaponLevel::Level1;
            }
        }

        if lc.phase != LifecyclePhase::Active {
            continue;
        }

        let due = craft.fire_acc.tick(dt);
        for _ in 0..due {
            shots += 1;
            let nose = pos.0 + Vec2::new(0.0, FIRE_OFFSET_Y);
            match craft.weapon_level {
                WeaponLevel::Level1 => muzzles.push(nose),
                WeaponLevel::Level2 => {
                    muzzles.push(nose + Vec2::new(-FIRE_OFFSET_X_LV2, 0.0));
                    muzzles.push(nose + Vec2::new(FIRE_OFFSET_X_LV2, 0.0));
                }
            }
        }
    }

    for muzzle in muzzles {
        world_setup::spawn_bullet(world, muzzle, play_area);
    }
    for _ in 0..shots {
        audio_events.push(AudioEvent::ShotFired);
    }
}
