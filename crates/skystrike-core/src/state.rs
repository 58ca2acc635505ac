//! Game state snapshot: the complete visible state handed to the
//! embedding runtime after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, UiEvent};
use crate::types::{Position, SimTime};

/// Complete game state produced by `GameEngine::tick`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub bomb_count: u32,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub pickups: Vec<PickupView>,
    /// Change notifications raised this tick (drained each snapshot).
    pub ui_events: Vec<UiEvent>,
    /// One-shot audio cues raised this tick (drained each snapshot).
    pub audio_events: Vec<AudioEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub weapon_level: WeaponLevel,
    pub invincible_remaining: f32,
    pub phase: LifecyclePhase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub class: EnemyClass,
    pub hp: i32,
    pub phase: LifecyclePhase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub kind: PickupKind,
    pub phase: LifecyclePhase,
}
