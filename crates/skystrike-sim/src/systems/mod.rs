//! Systems that operate on the simulation world each tick.
//!
//! Systems are functions that take `&mut World` plus whatever engine
//! state they settle into. They do not own state: per-actor state lives
//! in components, run-wide state in the engine.

pub mod cleanup;
pub mod contact;
pub mod lifecycle;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod weapon;
