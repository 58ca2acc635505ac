//! Player commands sent from the embedding runtime to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Touch input ---
    /// A finger went down. Only the first active touch gains drag control.
    TouchStart { id: u64 },
    /// The controlling finger moved by `delta` (play-area units).
    TouchMove { id: u64, delta: Vec2 },
    /// A finger lifted. Ends the drag and feeds double-tap detection.
    TouchEnd { id: u64 },
    /// The system cancelled a touch mid-gesture.
    TouchCancel { id: u64 },

    // --- Inventory ---
    /// Explicitly detonate a bomb (same path as the double tap).
    UseBomb,

    // --- Game flow ---
    /// Start a run from the ready screen.
    Start,
    Pause,
    Resume,
    /// Tear the world down and start a fresh run. The persisted high
    /// score survives.
    Restart,
}
