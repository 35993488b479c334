//! Game state snapshot: the complete visible state handed to the renderer
//! and UI after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, Extents, Position, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    /// Whole seconds on the game clock.
    pub clock_secs: u64,
    pub phase: GamePhase,
    pub resources: u32,
    pub wave: WaveView,
    pub controlled: Option<ControlledView>,
    pub control_mode: ControlMode,
    pub build_mode: bool,
    pub selected_building: BuildingKind,
    pub build_preview: Option<BuildPreview>,
    pub camera: CameraView,
    pub characters: Vec<CharacterView>,
    pub enemies: Vec<EnemyView>,
    pub buildings: Vec<BuildingView>,
    pub effects: Vec<EffectView>,
    pub events: Vec<GameEvent>,
}

/// Wave spawner status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub phase: WavePhase,
    /// True while the next wave is announced and counting down.
    pub incoming: bool,
    /// Seconds spent in the current phase.
    pub phase_elapsed_secs: f64,
}

/// The character currently under direct player control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlledView {
    pub id: EntityId,
    pub name: String,
    pub health: f64,
    pub max_health: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterView {
    pub id: EntityId,
    pub name: String,
    pub role: CharacterRole,
    pub color: String,
    pub position: Position,
    pub yaw: f64,
    pub health: f64,
    pub max_health: f64,
    pub airborne: bool,
    pub task: Option<TaskKind>,
    pub controlled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Position,
    pub yaw: f64,
    pub health: f64,
    pub max_health: f64,
    pub target: Position,
    /// Wave the enemy arrived with.
    pub wave: u32,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: EntityId,
    pub kind: BuildingKind,
    pub position: Position,
    pub size: Extents,
    pub health: f64,
    pub max_health: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub id: EntityId,
    pub start: Position,
    pub end: Position,
    pub elapsed_secs: f64,
    pub duration_secs: f64,
    pub color: String,
}

/// Non-committing projection of a placement, for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPreview {
    pub kind: BuildingKind,
    pub position: Position,
    pub size: Extents,
    pub color: String,
    pub affordable: bool,
}

/// Camera pose derived from the controlled character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: ControlMode,
    pub position: Position,
    /// Point the camera looks at (first-person) or orbits (third-person).
    pub target: Position,
    pub yaw: f64,
    pub pitch: f64,
}
