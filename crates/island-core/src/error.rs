//! Reasons a request can be turned down.
//!
//! A rejection is an expected outcome, not a fault: callers log it and
//! carry on. Nothing is mutated when a rejection is returned.

use thiserror::Error;

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),
    #[error("entity {0} is incapacitated")]
    Incapacitated(EntityId),
    #[error("attacker {0} is still on cooldown")]
    OnCooldown(EntityId),
    #[error("target {target} is out of range of {attacker}")]
    OutOfRange { attacker: EntityId, target: EntityId },
    #[error("no enemy in range")]
    NoTarget,
    #[error("insufficient resources: cost {cost}, balance {balance}")]
    InsufficientResources { cost: u32, balance: u32 },
    #[error("building kind cannot be placed")]
    NotPlaceable,
    #[error("build mode is off")]
    BuildModeOff,
    #[error("only the leader can assign tasks, and not to itself")]
    NotLeader,
    #[error("game is not active")]
    GameNotActive,
}
