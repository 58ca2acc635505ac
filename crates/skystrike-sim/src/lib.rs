//! Headless gameplay simulation for SKYSTRIKE, a 2D vertical shooter.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands and
//! physics contact notifications, runs all systems once per frame, and
//! produces `GameStateSnapshot`s. Completely headless (no renderer,
//! physics solver, or audio dependency), enabling deterministic testing.

pub mod engine;
pub mod highscore;
pub mod profiles;
pub mod systems;
pub mod world_setup;
