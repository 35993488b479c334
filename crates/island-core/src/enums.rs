//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which registry collection an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Character,
    Enemy,
    Building,
    AttackEffect,
}

/// Character role. Determines roster stats and task permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterRole {
    /// The king. The only role allowed to hand out tasks.
    Leader,
    Construction,
    Defense,
    Combat,
}

/// Building catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    /// The permanent castle. Exactly one exists; never placeable.
    Castle,
    #[default]
    Wall,
    Tower,
    Barracks,
}

/// Wave spawner phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Game not started yet.
    #[default]
    Idle,
    /// Next wave announced, counting down.
    Warning,
    /// Enemies being emitted. Instantaneous.
    Spawning,
    /// Quiet period between waves.
    Cooldown,
}

/// Camera / control mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Movement is relative to the character's own yaw.
    FirstPerson,
    /// Movement is relative to the orbit camera's yaw.
    #[default]
    ThirdPerson,
}

/// Task a non-leader character can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Defend,
    Gather,
    Attack,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Active,
    Paused,
    /// The castle has fallen. Terminal for the session.
    GameOver,
}
