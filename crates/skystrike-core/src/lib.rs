//! Core types and definitions for the SKYSTRIKE gameplay simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, and the two
//! pure scheduling algorithms (weighted selection, tick accumulation).
//! It has no dependency on any ECS or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod timing;
pub mod types;
pub mod weighted;

#[cfg(test)]
mod tests;
