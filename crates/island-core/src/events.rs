//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    GameStarted,
    /// A wave has been announced and will arrive in `eta_secs`.
    WaveIncoming { wave_number: u32, eta_secs: f64 },
    WaveSpawned { wave_number: u32, enemy_count: u32 },
    AttackLanded {
        attacker: EntityId,
        target: EntityId,
        damage: f64,
    },
    EnemyKilled { enemy: EntityId, reward: u32 },
    BuildingPlaced {
        building: EntityId,
        kind: BuildingKind,
        cost: u32,
    },
    CharacterSelected { character: EntityId },
    TaskAssigned { character: EntityId, task: TaskKind },
    /// The castle has fallen.
    GameOver { waves_survived: u32 },
}
