//! Steering rules: direct pursuit for enemies, basis-relative movement and
//! a kinematic jump arc for the controlled character, and the island
//! boundary clamp.

use glam::{DQuat, DVec3};

use island_core::components::JumpState;
use island_core::constants::{GROUND_HEIGHT, JUMP_GRAVITY, JUMP_LAUNCH_SPEED};
use island_core::types::{EntityId, Position, Velocity};

/// Horizontal velocity pointing straight at `target` with magnitude `speed`.
/// No obstacle avoidance. Zero when already at the target.
pub fn pursuit_velocity(position: Position, target: Position, speed: f64) -> Velocity {
    let mut to_target = target.to_dvec() - position.to_dvec();
    to_target.y = 0.0;
    Velocity::from(to_target.normalize_or_zero() * speed)
}

/// Forward and right unit vectors on the ground plane for a yaw.
/// Yaw 0 faces -Z with +X to the right.
pub fn movement_basis(yaw: f64) -> (DVec3, DVec3) {
    let rotation = DQuat::from_rotation_y(yaw);
    (rotation * DVec3::NEG_Z, rotation * DVec3::X)
}

/// Unit ground-plane direction for a `(right, forward)` intent expressed in
/// the basis of `yaw`. Zero intent stays zero.
pub fn compose_movement(right: f64, forward: f64, yaw: f64) -> DVec3 {
    let (fwd, rgt) = movement_basis(yaw);
    let mut direction = fwd * forward + rgt * right;
    direction.y = 0.0;
    direction.normalize_or_zero()
}

/// Project a point lying beyond `limit` from the island center back onto
/// the circle of radius `limit`, along the same angle. Height is kept.
pub fn clamp_to_island(position: Position, limit: f64) -> Position {
    if position.distance_from_center() <= limit {
        return position;
    }
    let angle = position.z.atan2(position.x);
    Position::new(limit * angle.cos(), position.y, limit * angle.sin())
}

/// Start a jump. Returns `None` when already airborne.
pub fn launch_jump(jump: JumpState) -> Option<JumpState> {
    if jump.airborne {
        return None;
    }
    Some(JumpState {
        airborne: true,
        vertical_velocity: JUMP_LAUNCH_SPEED,
    })
}

/// Advance a jump arc by one tick. Returns the new height and jump state.
/// Landing snaps to ground height and clears the airborne flag.
pub fn step_jump(height: f64, jump: JumpState, dt: f64) -> (f64, JumpState) {
    if !jump.airborne {
        return (height, jump);
    }
    let new_height = height + jump.vertical_velocity * dt;
    if new_height <= GROUND_HEIGHT {
        return (GROUND_HEIGHT, JumpState::default());
    }
    let next = JumpState {
        airborne: true,
        vertical_velocity: jump.vertical_velocity - JUMP_GRAVITY * dt,
    };
    (new_height, next)
}

/// Closest candidate within `range` of `origin`. Ties go to the lower id.
pub fn nearest_in_range(
    origin: Position,
    range: f64,
    candidates: impl IntoIterator<Item = (EntityId, Position)>,
) -> Option<EntityId> {
    candidates
        .into_iter()
        .map(|(id, pos)| (id, origin.range_to(&pos)))
        .filter(|&(_, dist)| dist <= range)
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(id, _)| id)
}
