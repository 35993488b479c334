//! Rule logic for the island defense simulation.
//!
//! Implements the wave phase state machine, per-wave enemy profiles,
//! pursuit and player steering, and placement snapping. Everything here
//! is a pure function over plain data; no ECS dependency.

pub mod placement;
pub mod profiles;
pub mod steering;
pub mod wave_fsm;

pub use island_core as core;

#[cfg(test)]
mod tests;
