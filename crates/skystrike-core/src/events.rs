//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PickupKind;

/// Change notifications for UI subscribers (labels, HUD).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// Player HP changed: carries (current, max).
    HpChanged { hp: i32, max_hp: i32 },
    /// Bomb inventory changed.
    BombCountChanged { count: u32 },
    /// Score changed.
    ScoreChanged { score: u32 },
    /// The run ended.
    GameOver {
        latest_score: u32,
        highest_score: u32,
    },
}

/// One-shot audio cues for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    ShotFired,
    EnemyHit,
    EnemyDown,
    PlayerHit,
    PickupCollected { kind: PickupKind },
    BombUsed,
    GameOver,
}
