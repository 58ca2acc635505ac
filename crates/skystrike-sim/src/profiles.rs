//! Per-class enemy tuning.
//!
//! Pure data lookups with no ECS dependency. Contact damage is part of the
//! profile rather than a hard-coded constant, so ramming a large craft
//! can hurt more than clipping a small one.

use skystrike_core::enums::EnemyClass;

/// Everything class-specific about an enemy craft.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    /// Descent speed (units/s).
    pub speed: f32,
    pub hp: i32,
    /// Score awarded on kill.
    pub score: u32,
    /// Damage dealt to the player on collision.
    pub contact_damage: i32,
    /// Horizontal spawn lane. Larger craft spawn away from the edges.
    pub spawn_min_x: f32,
    pub spawn_max_x: f32,
    /// Length of the death animation gating removal (seconds).
    pub die_gate_secs: f32,
}

pub fn enemy_profile(class: EnemyClass) -> EnemyProfile {
    match class {
        EnemyClass::Small => EnemyProfile {
            speed: 260.0,
            hp: 1,
            score: 1,
            contact_damage: 1,
            spawn_min_x: -226.0,
            spawn_max_x: 226.0,
            die_gate_secs: 0.35,
        },
        EnemyClass::Medium => EnemyProfile {
            speed: 200.0,
            hp: 3,
            score: 3,
            contact_damage: 1,
            spawn_min_x: -200.0,
            spawn_max_x: 200.0,
            die_gate_secs: 0.5,
        },
        EnemyClass::Large => EnemyProfile {
            speed: 140.0,
            hp: 6,
            score: 8,
            contact_damage: 2,
            spawn_min_x: -140.0,
            spawn_max_x: 140.0,
            die_gate_secs: 0.7,
        },
    }
}
