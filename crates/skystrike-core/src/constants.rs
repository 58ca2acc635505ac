//! Gameplay constants and tuning parameters.

use glam::Vec2;

// --- Play area ---

/// Bottom-left corner of the visible play area (pixels, Y up).
pub const PLAY_AREA_MIN: Vec2 = Vec2::new(-360.0, -640.0);

/// Top-right corner of the visible play area.
pub const PLAY_AREA_MAX: Vec2 = Vec2::new(360.0, 640.0);

/// Extra distance past the play-area edge before an actor is destroyed.
pub const DESPAWN_MARGIN: f32 = 80.0;

/// Y at which enemies and pickups appear (above the visible top edge).
pub const SPAWN_Y: f32 = 700.0;

// --- Player ---

/// Rectangle the player craft may be dragged within.
pub const PLAYER_MIN: Vec2 = Vec2::new(-226.0, -387.0);
pub const PLAYER_MAX: Vec2 = Vec2::new(226.0, 360.0);

/// Starting position of the player craft.
pub const PLAYER_START: Vec2 = Vec2::new(0.0, -300.0);

pub const PLAYER_MAX_HP: i32 = 3;

/// Invincibility window after taking a hit (seconds).
pub const INVINCIBLE_SECS: f32 = 1.0;

/// Gating animation length for the player crash sequence (seconds).
pub const PLAYER_CRASH_GATE_SECS: f32 = 0.8;

// --- Weapon ---

/// Bullets per second while the trigger is held (always, here).
pub const FIRE_RATE: f32 = 8.0;

pub const BULLET_SPEED: f32 = 400.0;
pub const BULLET_DAMAGE: i32 = 1;

/// Muzzle offset from the player's position.
pub const FIRE_OFFSET_Y: f32 = 40.0;

/// Horizontal offset of the twin fire points at weapon level 2.
pub const FIRE_OFFSET_X_LV2: f32 = 18.0;

/// How long a weapon upgrade lasts before decaying to level 1 (seconds).
pub const LEVEL_UP_SECS: f32 = 10.0;

// --- Enemy spawning ---

/// Seconds between enemy spawns. <= 0 disables spawning.
pub const ENEMY_SPAWN_INTERVAL: f32 = 0.6;

/// Spawn weights per class (relative, not percentages).
pub const SMALL_WEIGHT: f32 = 70.0;
pub const MEDIUM_WEIGHT: f32 = 25.0;
pub const LARGE_WEIGHT: f32 = 5.0;

// --- Pickup spawning ---

/// Seconds between pickup spawns. <= 0 disables spawning.
pub const PICKUP_SPAWN_INTERVAL: f32 = 8.0;

pub const PICKUP_SPAWN_MIN_X: f32 = -200.0;
pub const PICKUP_SPAWN_MAX_X: f32 = 200.0;

pub const WEAPON_UPGRADE_WEIGHT: f32 = 70.0;
pub const BOMB_WEIGHT: f32 = 30.0;

pub const PICKUP_FALL_SPEED: f32 = 200.0;

/// Gating animation length for the pickup-collected sequence (seconds).
pub const PICKUP_GATE_SECS: f32 = 0.3;

// --- Lifecycle ---

/// Slack added to the gating-animation fallback timer, so removal still
/// happens if the animation-finished notification is missed.
pub const REMOVAL_SLACK: f32 = 0.05;

// --- Score / bombs ---

pub const MAX_BOMBS: u32 = 99;

/// Maximum wall-clock gap between two taps counting as a double tap (seconds).
pub const DOUBLE_TAP_SECS: f32 = 0.3;

/// Fixed key the persisted high score lives under.
pub const HIGH_SCORE_KEY: &str = "skystrike_high_score";
