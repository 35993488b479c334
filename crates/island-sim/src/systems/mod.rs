//! Per-tick systems over the entity registry.
//!
//! Systems are free functions. They keep no state of their own: entity data
//! lives in the registry, and cross-tick bookkeeping (wave state, control
//! state, the ledger) is owned by the engine and passed in.

pub mod build;
pub mod camera;
pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod proximity;
pub mod snapshot;
pub mod wave_spawner;
