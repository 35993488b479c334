//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Position};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Leave the title screen and start the first wave countdown.
    StartGame,
    /// Freeze the clock and all systems.
    Pause,
    /// Resume a paused game.
    Resume,

    // --- Control ---
    /// Switch between first- and third-person control.
    SetControlMode { mode: ControlMode },
    /// Make a different character the controlled one.
    SelectCharacter { id: EntityId },
    /// Movement intent from held keys: `right` and `forward` in [-1, 1].
    /// Stays in effect until the next `Move`.
    Move { right: f64, forward: f64 },
    /// Start a jump if the controlled character is grounded.
    Jump,
    /// Strike the nearest enemy in range of the controlled character.
    Attack,
    /// Mouse-look delta (radians). Applied only in first-person.
    Look { delta_yaw: f64, delta_pitch: f64 },
    /// Yaw reported by the external third-person orbit controller.
    OrbitCamera { yaw: f64 },

    // --- Building ---
    SetBuildMode { enabled: bool },
    SelectBuildingType { kind: BuildingKind },
    /// Ground point under the build cursor, for the placement preview.
    PointBuildCursor { position: Position },
    /// Place the selected building kind at a raw ground point.
    Place { position: Position },

    // --- Tasks ---
    /// Leader hands a task to another character.
    AssignTask { character: EntityId, task: TaskKind },
}
