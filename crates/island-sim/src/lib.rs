//! Simulation engine for the island defense game.
//!
//! Owns the entity registry (a hecs ECS world keyed by stable ids), runs
//! systems at a fixed tick rate, and produces `GameStateSnapshot`s for the
//! renderer and UI.

pub mod config;
pub mod control;
pub mod engine;
pub mod ledger;
pub mod physics;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, PhysicsMode, SimConfig};
pub use engine::SimulationEngine;
pub use island_core as core;
