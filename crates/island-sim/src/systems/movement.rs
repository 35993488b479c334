//! Movement: the controlled character's walk and jumps, and enemy pursuit.

use log::trace;

use island_ai::steering;
use island_core::components::{EnemyProfile, Facing, JumpState, Mobility};
use island_core::constants::{BASE_MOVE_SPEED, ISLAND_EDGE_MARGIN, ISLAND_RADIUS};
use island_core::enums::EntityKind;
use island_core::types::{EntityId, Position, Velocity};

use crate::control::MoveIntent;
use crate::physics::BodyCommand;
use crate::registry::Registry;
use crate::systems::combat;

/// Advance every airborne character's jump arc, controlled or not.
pub fn run_jumps(registry: &mut Registry, dt: f64) {
    for id in registry.list(EntityKind::Character) {
        let (Some(jump), Some(position)) =
            (registry.get::<JumpState>(id), registry.get::<Position>(id))
        else {
            continue;
        };
        if !jump.airborne {
            continue;
        }
        let (height, next) = steering::step_jump(position.y, jump, dt);
        registry.update::<Position>(id, |p| p.y = height);
        registry.update::<JumpState>(id, |j| *j = next);
    }
}

/// Walk the controlled character along `intent`, expressed in the basis of
/// `basis_yaw`, and keep it on the island.
pub fn move_controlled(
    registry: &mut Registry,
    controlled: EntityId,
    intent: MoveIntent,
    basis_yaw: f64,
    dt: f64,
    body_commands: &mut Vec<BodyCommand>,
) {
    let Some(position) = registry.get::<Position>(controlled) else {
        return;
    };
    if combat::is_incapacitated(registry, controlled) {
        return;
    }
    let speed = registry
        .get::<Mobility>(controlled)
        .map_or(0.0, |m| m.speed);

    let step = steering::compose_movement(intent.right, intent.forward, basis_yaw)
        * (BASE_MOVE_SPEED * speed * dt);
    let moved = Position::new(position.x + step.x, position.y, position.z + step.z);
    let clamped = steering::clamp_to_island(moved, ISLAND_RADIUS - ISLAND_EDGE_MARGIN);

    registry.update::<Position>(controlled, |p| *p = clamped);
    body_commands.push(BodyCommand::SetPosition {
        id: controlled,
        position: clamped,
    });
}

/// Point every enemy at its target at its own speed. Vertical velocity is
/// left alone.
pub fn steer_enemies(registry: &mut Registry, body_commands: &mut Vec<BodyCommand>) {
    for id in registry.list(EntityKind::Enemy) {
        let (Some(position), Some(profile), Some(mobility)) = (
            registry.get::<Position>(id),
            registry.get::<EnemyProfile>(id),
            registry.get::<Mobility>(id),
        ) else {
            continue;
        };

        let desired = steering::pursuit_velocity(position, profile.target, mobility.speed);
        let mut velocity = Velocity::default();
        registry.update::<Velocity>(id, |v| {
            v.x = desired.x;
            v.z = desired.z;
            velocity = *v;
        });
        if desired.speed() > 0.0 {
            registry.update::<Facing>(id, |f| f.yaw = desired.heading());
        }
        trace!("enemy {id} steering ({:.2}, {:.2})", desired.x, desired.z);
        body_commands.push(BodyCommand::SetVelocity { id, velocity });
    }
}
