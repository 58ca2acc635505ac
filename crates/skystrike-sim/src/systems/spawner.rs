//! Spawn scheduling: fixed-rate generation of enemies and pickups with
//! weighted class selection.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::constants::*;
use skystrike_core::enums::{EnemyClass, PickupKind};
use skystrike_core::timing::TickAccumulator;
use skystrike_core::types::PlayArea;
use skystrike_core::weighted::{pick, WeightedEntry};

use crate::profiles::enemy_profile;
use crate::world_setup;

/// Spawn schedule for a run: two independent accumulators plus the
/// weighted candidate tables they draw from. An entry with no payload is
/// disabled and contributes zero weight.
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    pub enemy_timer: TickAccumulator,
    pub pickup_timer: TickAccumulator,
    pub enemy_table: Vec<WeightedEntry<EnemyClass>>,
    pub pickup_table: Vec<WeightedEntry<PickupKind>>,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self {
            enemy_timer: TickAccumulator::new(ENEMY_SPAWN_INTERVAL),
            pickup_timer: TickAccumulator::new(PICKUP_SPAWN_INTERVAL),
            enemy_table: vec![
                WeightedEntry::new(SMALL_WEIGHT, EnemyClass::Small),
                WeightedEntry::new(MEDIUM_WEIGHT, EnemyClass::Medium),
                WeightedEntry::new(LARGE_WEIGHT, EnemyClass::Large),
            ],
            pickup_table: vec![
                WeightedEntry::new(WEAPON_UPGRADE_WEIGHT, PickupKind::WeaponUpgrade),
                WeightedEntry::new(BOMB_WEIGHT, PickupKind::Bomb),
            ],
        }
    }
}

/// Advance both schedulers and spawn everything that came due. After a
/// frame hitch each accumulator catches up, so the long-run spawn rate
/// tracks the configured interval.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut SpawnDirector,
    play_area: &PlayArea,
    dt: f32,
) {
    let enemies_due = director.enemy_timer.tick(dt);
    for _ in 0..enemies_due {
        let Some(&class) = pick(&director.enemy_table, rng) else {
            continue;
        };
        let profile = enemy_profile(class);
        let x = random_x(rng, profile.spawn_min_x, profile.spawn_max_x);
        world_setup::spawn_enemy(world, class, x, play_area);
        log::debug!("spawned {class:?} enemy at x={x:.1}");
    }

    let pickups_due = director.pickup_timer.tick(dt);
    for _ in 0..pickups_due {
        let Some(&kind) = pick(&director.pickup_table, rng) else {
            continue;
        };
        let x = random_x(rng, PICKUP_SPAWN_MIN_X, PICKUP_SPAWN_MAX_X);
        world_setup::spawn_pickup(world, kind, x, play_area);
        log::debug!("spawned {kind:?} pickup at x={x:.1}");
    }
}

/// Uniform X inside the lane; tolerates swapped bounds.
fn random_x(rng: &mut ChaCha8Rng, min_x: f32, max_x: f32) -> f32 {
    let (lo, hi) = (min_x.min(max_x), min_x.max(max_x));
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
