//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D world position in play-area units (pixels, Y up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

/// Axis-aligned rectangle describing the visible play area.
///
/// Destruction thresholds for falling/rising actors are derived from its
/// bottom/top edges plus a margin, so spawn logic stays resolution
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayArea {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// World Y below which a falling actor is gone for good.
    pub fn fall_limit(&self, margin: f32) -> f32 {
        self.min.y - margin.max(0.0)
    }

    /// World Y above which a rising actor is gone for good.
    pub fn rise_limit(&self, margin: f32) -> f32 {
        self.max.y + margin.max(0.0)
    }

    /// Clamp a point into the rectangle.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            min: crate::constants::PLAY_AREA_MIN,
            max: crate::constants::PLAY_AREA_MAX,
        }
    }
}

/// Simulation time tracking. Advanced by the variable frame delta each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
