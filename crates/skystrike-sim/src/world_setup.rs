//! Entity spawn factories.
//!
//! Creates the player craft, enemies, bullets, and pickups with
//! appropriate component bundles. Destruction thresholds are computed
//! here, at spawn time, from the current play-area geometry.

use glam::Vec2;
use hecs::World;

use skystrike_core::components::*;
use skystrike_core::constants::*;
use skystrike_core::enums::*;
use skystrike_core::timing::TickAccumulator;
use skystrike_core::types::{PlayArea, Position};

use crate::profiles::enemy_profile;
use crate::systems::contact::ContactBuffer;

/// Spawn the player craft at its starting position.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerCraft {
            weapon_level: WeaponLevel::Level1,
            level_up_remaining: 0.0,
            invincible_remaining: 0.0,
            fire_acc: TickAccumulator::per_second(FIRE_RATE),
        },
        Position(PLAYER_START),
        Health::full(PLAYER_MAX_HP),
        Lifecycle::with_gate(Some(PLAYER_CRASH_GATE_SECS)),
        ContactBuffer::default(),
    ))
}

/// Spawn one enemy at the spawn row, descending.
pub fn spawn_enemy(
    world: &mut World,
    class: EnemyClass,
    x: f32,
    play_area: &PlayArea,
) -> hecs::Entity {
    let profile = enemy_profile(class);
    world.spawn((
        Enemy {
            class,
            score: profile.score,
            contact_damage: profile.contact_damage,
        },
        Position::new(x, SPAWN_Y),
        LinearMotion {
            velocity: Vec2::new(0.0, -profile.speed),
        },
        BoundaryKill {
            limit_y: play_area.fall_limit(DESPAWN_MARGIN),
            travel: Travel::Falling,
        },
        Health::full(profile.hp),
        Lifecycle::with_gate(Some(profile.die_gate_secs)),
        ContactBuffer::default(),
    ))
}

/// Spawn one player bullet, climbing. No gating animation: bullets are
/// removed the moment they hit or leave the screen.
pub fn spawn_bullet(world: &mut World, muzzle: Vec2, play_area: &PlayArea) -> hecs::Entity {
    world.spawn((
        Bullet {
            damage: BULLET_DAMAGE,
            claimed: false,
        },
        Position(muzzle),
        LinearMotion {
            velocity: Vec2::new(0.0, BULLET_SPEED),
        },
        BoundaryKill {
            limit_y: play_area.rise_limit(DESPAWN_MARGIN),
            travel: Travel::Rising,
        },
        Lifecycle::with_gate(None),
    ))
}

/// Spawn one pickup at the spawn row, descending.
pub fn spawn_pickup(
    world: &mut World,
    kind: PickupKind,
    x: f32,
    play_area: &PlayArea,
) -> hecs::Entity {
    world.spawn((
        Pickup { kind },
        Position::new(x, SPAWN_Y),
        LinearMotion {
            velocity: Vec2::new(0.0, -PICKUP_FALL_SPEED),
        },
        BoundaryKill {
            limit_y: play_area.fall_limit(DESPAWN_MARGIN),
            travel: Travel::Falling,
        },
        Lifecycle::with_gate(Some(PICKUP_GATE_SECS)),
        ContactBuffer::default(),
    ))
}
