//! ECS components for gameplay entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::timing::TickAccumulator;

/// Straight-line motion: position += velocity * dt each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LinearMotion {
    pub velocity: Vec2,
}

/// Destruction boundary along the travel axis.
///
/// Computed once at spawn/activation from the current play-area geometry,
/// so pooled or late-spawned actors always carry a fresh threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundaryKill {
    pub limit_y: f32,
    pub travel: Travel,
}

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
    pub max_hp: i32,
}

impl Health {
    pub fn full(max_hp: i32) -> Self {
        Self { hp: max_hp, max_hp }
    }
}

/// Actor lifecycle state (see `LifecyclePhase`).
///
/// `gate_secs` is the length of the gating animation played on entering
/// `Reacting`; `None` means removal is immediate. `fallback_remaining` is
/// armed at `gate_secs + REMOVAL_SLACK` so the actor is still removed if
/// the animation-finished notification never arrives. `removal_pending`
/// short-circuits every later removal trigger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifecycle {
    pub phase: LifecyclePhase,
    pub removal_pending: bool,
    pub gate_secs: Option<f32>,
    pub fallback_remaining: Option<f32>,
}

impl Lifecycle {
    pub fn with_gate(gate_secs: Option<f32>) -> Self {
        Self {
            gate_secs,
            ..Self::default()
        }
    }
}

/// Marks the player craft and carries its weapon/protection timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCraft {
    pub weapon_level: WeaponLevel,
    /// Seconds of weapon upgrade left; level decays when it reaches 0.
    pub level_up_remaining: f32,
    /// Seconds of post-hit invincibility left.
    pub invincible_remaining: f32,
    /// Fixed-rate fire scheduler.
    pub fire_acc: TickAccumulator,
}

/// Marks an enemy craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub class: EnemyClass,
    /// Score awarded when this enemy enters its death sequence.
    pub score: u32,
    /// Damage dealt to the player on collision (per-class, not a global
    /// constant).
    pub contact_damage: i32,
}

/// Marks a player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub damage: i32,
    /// Set the moment a contact against this bullet is first registered,
    /// so a second overlapping pair in the same tick cannot double-count.
    pub claimed: bool,
}

/// Marks a collectible pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
}
