//! Island defense runner.
//!
//! Wires the simulation engine to a fixed-rate game loop thread, or runs it
//! headless as fast as possible, and reports the final snapshot.

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use island_core as core;
