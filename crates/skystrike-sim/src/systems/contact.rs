//! Deferred contact buffering and once-per-tick settlement.
//!
//! The physics collaborator may deliver begin-contact notifications at
//! any point during its solver step, where despawning bodies or mutating
//! world state is unsafe. `register` therefore only validates handles,
//! claims the other body, and appends to the owning actor's buffer.
//! `drain` runs once at the start of each tick and applies everything in
//! one settlement: claimed bullets are removed, damage lands as a single
//! decrement, pickups grant their effect, and at most one death-sequence
//! entry happens per actor no matter how many contacts arrived.

use hecs::{Entity, World};

use skystrike_core::components::*;
use skystrike_core::constants::{INVINCIBLE_SECS, LEVEL_UP_SECS, MAX_BOMBS};
use skystrike_core::enums::{LifecyclePhase, PickupKind, WeaponLevel};
use skystrike_core::events::{AudioEvent, UiEvent};

use crate::engine::ScoreState;
use crate::systems::lifecycle;

/// Per-actor pending-contact queue.
///
/// `claimed` holds the other bodies registered this window, each at most
/// once. `pending_damage` is the same-tick damage aggregate. `hit_queued`
/// limits player and pickup settlement to one per window.
#[derive(Debug, Clone, Default)]
pub struct ContactBuffer {
    pub claimed: Vec<Entity>,
    pub pending_damage: i32,
    pub hit_queued: bool,
}

/// Capture one begin-contact notification. Safe to call from inside the
/// physics callback: no despawns, no health/score mutation, no events.
/// Unknown pairings and stale handles are silently ignored.
pub fn register(world: &mut World, actor: Entity, other: Entity) {
    if world.satisfies::<&Enemy>(actor).unwrap_or(false) {
        register_bullet_hit(world, actor, other);
    } else if world.satisfies::<&PlayerCraft>(actor).unwrap_or(false) {
        register_enemy_collision(world, actor, other);
    } else if world.satisfies::<&Pickup>(actor).unwrap_or(false) {
        register_pickup_touch(world, actor, other);
    }
}

/// Enemy <- bullet: claim the bullet and queue its damage.
fn register_bullet_hit(world: &mut World, enemy: Entity, bullet: Entity) {
    if !is_active(world, enemy) {
        return;
    }
    let damage = {
        let Ok(mut b) = world.get::<&mut Bullet>(bullet) else {
            return;
        };
        if b.claimed {
            // Duplicate delivery for one overlapping pair, or another
            // enemy got there first this tick.
            return;
        }
        b.claimed = true;
        b.damage.max(0)
    };

    let Ok(mut buf) = world.get::<&mut ContactBuffer>(enemy) else {
        return;
    };
    buf.claimed.push(bullet);
    buf.pending_damage += damage;
}

/// Player <- enemy: one collision settlement per window, skipped entirely
/// while invincible.
fn register_enemy_collision(world: &mut World, player: Entity, enemy: Entity) {
    if !is_active(world, player) || !is_active(world, enemy) {
        return;
    }
    {
        let Ok(craft) = world.get::<&PlayerCraft>(player) else {
            return;
        };
        if craft.invincible_remaining > 0.0 {
            return;
        }
    }
    let damage = {
        let Ok(e) = world.get::<&Enemy>(enemy) else {
            return;
        };
        e.contact_damage.max(0)
    };

    let Ok(mut buf) = world.get::<&mut ContactBuffer>(player) else {
        return;
    };
    if buf.hit_queued {
        return;
    }
    buf.hit_queued = true;
    buf.claimed.push(enemy);
    buf.pending_damage += damage;
}

/// Pickup <- player: queue the collection.
fn register_pickup_touch(world: &mut World, pickup: Entity, player: Entity) {
    if !is_active(world, pickup) {
        return;
    }
    if !world.satisfies::<&PlayerCraft>(player).unwrap_or(false) {
        return;
    }

    let Ok(mut buf) = world.get::<&mut ContactBuffer>(pickup) else {
        return;
    };
    if buf.hit_queued {
        return;
    }
    buf.hit_queued = true;
    buf.claimed.push(player);
}

/// Settle all buffered contacts. Runs once per tick, before movement and
/// boundary logic. Draining empty buffers is a no-op.
pub fn drain(
    world: &mut World,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    drain_enemies(world, score, ui_events, audio_events);
    drain_pickups(world, score, ui_events, audio_events);
    drain_player(world, score, ui_events, audio_events);
}

fn drain_enemies(
    world: &mut World,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let mut settlements: Vec<(Entity, Vec<Entity>, i32)> = Vec::new();
    for (entity, (buf, _enemy)) in world.query_mut::<(&mut ContactBuffer, &Enemy)>() {
        if buf.claimed.is_empty() && buf.pending_damage == 0 {
            continue;
        }
        settlements.push((
            entity,
            std::mem::take(&mut buf.claimed),
            std::mem::take(&mut buf.pending_damage),
        ));
    }

    for (enemy, bullets, damage) in settlements {
        for bullet in bullets {
            lifecycle::request_removal(world, bullet);
        }
        if damage > 0 {
            apply_enemy_damage(world, enemy, damage, score, ui_events, audio_events);
        }
    }
}

/// One health decrement per tick no matter how many bullets landed, and a
/// single death check, so two simultaneous lethal hits cannot start the
/// death sequence twice.
fn apply_enemy_damage(
    world: &mut World,
    entity: Entity,
    damage: i32,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let lethal = match world.query_one_mut::<(&mut Health, &Lifecycle)>(entity) {
        Ok((health, lc)) => {
            if lc.phase != LifecyclePhase::Active {
                return;
            }
            health.hp -= damage;
            health.hp <= 0
        }
        Err(_) => return,
    };

    if lethal {
        lifecycle::enemy_down(world, entity, score, ui_events, audio_events);
    } else {
        audio_events.push(AudioEvent::EnemyHit);
    }
}

fn drain_pickups(
    world: &mut World,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let mut collected: Vec<(Entity, PickupKind, Option<Entity>)> = Vec::new();
    for (entity, (buf, pickup)) in world.query_mut::<(&mut ContactBuffer, &Pickup)>() {
        if !buf.hit_queued {
            continue;
        }
        buf.hit_queued = false;
        let player = buf.claimed.drain(..).next();
        collected.push((entity, pickup.kind, player));
    }

    for (pickup, kind, player) in collected {
        // The player may have been destroyed between registration and
        // settlement; the pickup still goes away, but grants nothing.
        let granted = player.is_some_and(|p| grant_pickup(world, p, kind, score, ui_events));
        if granted {
            audio_events.push(AudioEvent::PickupCollected { kind });
            if let Ok(mut lc) = world.get::<&mut Lifecycle>(pickup) {
                lifecycle::enter_reacting(&mut lc);
            }
        } else {
            lifecycle::request_removal(world, pickup);
        }
    }
}

fn grant_pickup(
    world: &mut World,
    player: Entity,
    kind: PickupKind,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
) -> bool {
    match kind {
        PickupKind::WeaponUpgrade => {
            let Ok(craft) = world.query_one_mut::<&mut PlayerCraft>(player) else {
                return false;
            };
            craft.weapon_level = WeaponLevel::Level2;
            craft.level_up_remaining = LEVEL_UP_SECS;
            true
        }
        PickupKind::Bomb => {
            if !world.satisfies::<&PlayerCraft>(player).unwrap_or(false) {
                return false;
            }
            score.bombs = (score.bombs + 1).min(MAX_BOMBS);
            ui_events.push(UiEvent::BombCountChanged { count: score.bombs });
            true
        }
    }
}

fn drain_player(
    world: &mut World,
    score: &mut ScoreState,
    ui_events: &mut Vec<UiEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let mut settlement: Option<(Entity, Vec<Entity>, i32)> = None;
    for (entity, (buf, _craft)) in world.query_mut::<(&mut ContactBuffer, &PlayerCraft)>() {
        if !buf.hit_queued {
            continue;
        }
        buf.hit_queued = false;
        settlement = Some((
            entity,
            std::mem::take(&mut buf.claimed),
            std::mem::take(&mut buf.pending_damage),
        ));
    }

    let Some((player, enemies, damage)) = settlement else {
        return;
    };

    // The rammed enemy goes down regardless of what happens to the player.
    for enemy in enemies {
        lifecycle::enemy_down(world, enemy, score, ui_events, audio_events);
    }
    apply_player_damage(world, player, damage, ui_events, audio_events);
}

fn apply_player_damage(
    world: &mut World,
    player: Entity,
    damage: i32,
    ui_events: &mut Vec<UiEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    if damage <= 0 {
        return;
    }
    let Ok((craft, health, lc)) =
        world.query_one_mut::<(&mut PlayerCraft, &mut Health, &mut Lifecycle)>(player)
    else {
        return;
    };
    if lc.phase != LifecyclePhase::Active {
        return;
    }

    health.hp -= damage;
    craft.invincible_remaining = INVINCIBLE_SECS;
    let (hp, max_hp) = (health.hp, health.max_hp);
    if hp <= 0 {
        // Crash sequence; the gate keeps the craft on screen until the
        // animation finishes or the fallback timer fires.
        lifecycle::enter_reacting(lc);
    }

    ui_events.push(UiEvent::HpChanged { hp, max_hp });
    audio_events.push(AudioEvent::PlayerHit);
}

fn is_active(world: &World, entity: Entity) -> bool {
    world
        .get::<&Lifecycle>(entity)
        .map(|lc| lc.phase == LifecyclePhase::Active)
        .unwrap_or(false)
}
