//! Snapshot assembly: the complete visible state for the embedding
//! runtime, built read-only from the world after all systems ran.

use hecs::World;

use skystrike_core::components::*;
use skystrike_core::enums::GamePhase;
use skystrike_core::events::{AudioEvent, UiEvent};
use skystrike_core::state::*;
use skystrike_core::types::{Position, SimTime};

use crate::engine::ScoreState;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    high_score: u32,
    ui_events: Vec<UiEvent>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let mut snapshot = GameStateSnapshot {
        time: *time,
        phase,
        score: score.score,
        high_score,
        bomb_count: score.bombs,
        player: None,
        enemies: Vec::new(),
        bullets: Vec::new(),
        pickups: Vec::new(),
        ui_events,
        audio_events,
    };

    for (_entity, (craft, pos, health, lc)) in world
        .query::<(&PlayerCraft, &Position, &Health, &Lifecycle)>()
        .iter()
    {
        snapshot.player = Some(PlayerView {
            position: *pos,
            hp: health.hp,
            max_hp: health.max_hp,
            weapon_level: craft.weapon_level,
            invincible_remaining: craft.invincible_remaining,
            phase: lc.phase,
        });
    }

    for (_entity, (enemy, pos, health, lc)) in world
        .query::<(&Enemy, &Position, &Health, &Lifecycle)>()
        .iter()
    {
        snapshot.enemies.push(EnemyView {
            position: *pos,
            class: enemy.class,
            hp: health.hp,
            phase: lc.phase,
        });
    }

    for (_entity, (_bullet, pos)) in world.query::<(&Bullet, &Position)>().iter() {
        snapshot.bullets.push(BulletView { position: *pos });
    }

    for (_entity, (pickup, pos, lc)) in world.query::<(&Pickup, &Position, &Lifecycle)>().iter() {
        snapshot.pickups.push(PickupView {
            position: *pos,
            kind: pickup.kind,
            phase: lc.phase,
        });
    }

    snapshot
}
