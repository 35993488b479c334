//! Bridge to the physics collaborator.
//!
//! The engine publishes intended motion as [`BodyCommand`]s and accepts the
//! resulting poses as [`BodyFeedback`], keyed by entity id. In
//! [`PhysicsMode::Kinematic`](crate::PhysicsMode) there is no collaborator
//! and [`integrate`] stands in for it.

use serde::{Deserialize, Serialize};

use island_core::components::EnemyProfile;
use island_core::enums::EntityKind;
use island_core::types::{EntityId, Position, Velocity};

use crate::registry::Registry;

/// Pose reported by the physics collaborator for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFeedback {
    pub id: EntityId,
    pub position: Position,
    pub velocity: Velocity,
}

/// Motion the engine wants applied to a body before the next step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BodyCommand {
    SetVelocity { id: EntityId, velocity: Velocity },
    SetPosition { id: EntityId, position: Position },
}

/// Write reported poses into the registry. Feedback for ids that no longer
/// exist is dropped. Returns how many reports were applied.
pub fn apply_feedback(
    registry: &mut Registry,
    feedback: impl IntoIterator<Item = BodyFeedback>,
) -> usize {
    let mut applied = 0;
    for report in feedback {
        if !registry.update::<Position>(report.id, |p| *p = report.position) {
            continue;
        }
        registry.update::<Velocity>(report.id, |v| *v = report.velocity);
        registry.update::<EnemyProfile>(report.id, |e| e.last_velocity = report.velocity);
        applied += 1;
    }
    applied
}

/// Kinematic stand-in for the physics step: move every enemy along its
/// horizontal velocity.
pub fn integrate(registry: &mut Registry, dt: f64) {
    for id in registry.list(EntityKind::Enemy) {
        let Some(velocity) = registry.get::<Velocity>(id) else {
            continue;
        };
        registry.update::<Position>(id, |p| {
            p.x += velocity.x * dt;
            p.z += velocity.z * dt;
        });
        registry.update::<EnemyProfile>(id, |e| e.last_velocity = velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_body(registry: &mut Registry) -> EntityId {
        registry.create(
            EntityKind::Enemy,
            (
                Position::new(10.0, 1.0, 0.0),
                Velocity::new(-2.0, 0.0, 0.0),
                EnemyProfile {
                    target: Position::default(),
                    last_velocity: Velocity::default(),
                    wave: 1,
                },
            ),
        )
    }

    #[test]
    fn feedback_for_unknown_ids_is_ignored() {
        let mut registry = Registry::new();
        let body = spawn_body(&mut registry);
        let reports = [
            BodyFeedback {
                id: body,
                position: Position::new(9.0, 1.2, 0.5),
                velocity: Velocity::new(-1.0, 0.0, 0.0),
            },
            BodyFeedback {
                id: EntityId(999),
                position: Position::default(),
                velocity: Velocity::default(),
            },
        ];
        assert_eq!(apply_feedback(&mut registry, reports), 1);
        assert_eq!(
            registry.get::<Position>(body),
            Some(Position::new(9.0, 1.2, 0.5))
        );
        assert_eq!(
            registry
                .get::<EnemyProfile>(body)
                .map(|e| e.last_velocity.x),
            Some(-1.0)
        );
    }

    #[test]
    fn integrate_moves_horizontally_only() {
        let mut registry = Registry::new();
        let body = spawn_body(&mut registry);
        registry.update::<Velocity>(body, |v| v.y = 5.0);
        integrate(&mut registry, 0.5);
        assert_eq!(
            registry.get::<Position>(body),
            Some(Position::new(9.0, 1.0, 0.0))
        );
    }
}
