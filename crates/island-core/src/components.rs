//! ECS components stored in the entity registry.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Extents, Position, Velocity};

/// Facing yaw in radians (0 = facing -Z, counter-clockwise seen from above).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f64,
}

/// Hit points, kept within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Movement speed multiplier (characters) or pursuit speed in m/s (enemies).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mobility {
    pub speed: f64,
}

/// Attack power and reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub damage: f64,
    pub attack_range: f64,
}

/// Cosmetic color tag. Has no behavioral effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tint {
    pub color: String,
}

/// Identity of a roster character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub role: CharacterRole,
}

/// Vertical jump arc state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    pub airborne: bool,
    pub vertical_velocity: f64,
}

/// Task handed out by the leader, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignedTask {
    pub task: Option<TaskKind>,
}

/// Timestamp of the last attack that landed (absolute sim seconds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackCooldown {
    pub last_attack_secs: Option<f64>,
}

/// Enemy pursuit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    /// Castle position captured at spawn. Never re-targeted.
    pub target: Position,
    /// Latest velocity reported by (or commanded to) the physics body.
    pub last_velocity: Velocity,
    /// Wave this enemy was spawned in.
    pub wave: u32,
}

/// Building catalog data attached at placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingProfile {
    pub kind: BuildingKind,
    pub size: Extents,
    pub cost: u32,
}

/// Transient strike/projectile animation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackEffect {
    pub start: Position,
    pub end: Position,
    /// Sim time at which the effect was created.
    pub started_at_secs: f64,
    pub duration_secs: f64,
    pub color: String,
}
