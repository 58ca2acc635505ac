//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy size class. Drives speed, durability, score, and spawn lane width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    #[default]
    Small,
    Medium,
    Large,
}

/// What a collectible pickup grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Upgrade the player's weapon to level 2 for a limited time.
    WeaponUpgrade,
    /// Add one bomb to the inventory.
    Bomb,
}

/// Player weapon fire mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponLevel {
    #[default]
    Level1,
    Level2,
}

/// Per-actor lifecycle phase.
///
/// `Active` actors move, collide, and take damage. `Reacting` actors have
/// begun their death/pickup sequence and ignore further contacts while a
/// gating animation plays. `Removed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePhase {
    #[default]
    Active,
    Reacting,
    Removed,
}

/// Primary travel direction of a straight-line actor, for boundary tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Travel {
    /// Removed once Y drops below the limit (enemies, pickups).
    Falling,
    /// Removed once Y climbs above the limit (bullets).
    Rising,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Ready,
    Active,
    Paused,
    GameOver,
}
