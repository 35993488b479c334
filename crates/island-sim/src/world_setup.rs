//! Entity spawning: the castle, the starting roster, enemies, player
//! buildings and attack effects.

use island_ai::profiles::EnemyStats;
use island_core::catalog::{building_spec, CharacterSpec, ENEMY_COLOR, ROSTER};
use island_core::components::*;
use island_core::constants::CASTLE_POSITION;
use island_core::enums::{BuildingKind, EntityKind};
use island_core::types::{EntityId, Position, Velocity};

use crate::registry::Registry;

/// Spawn the castle at its fixed location.
pub fn spawn_castle(registry: &mut Registry) -> EntityId {
    spawn_building(registry, BuildingKind::Castle, CASTLE_POSITION)
}

/// Spawn the four roster characters. The leader comes first.
pub fn spawn_roster(registry: &mut Registry) -> [EntityId; 4] {
    ROSTER.map(|spec| spawn_character(registry, &spec))
}

pub fn spawn_character(registry: &mut Registry, spec: &CharacterSpec) -> EntityId {
    registry.create(
        EntityKind::Character,
        (
            spec.position,
            Velocity::default(),
            Facing::default(),
            Health {
                current: spec.health,
                max: spec.health,
            },
            Mobility { speed: spec.speed },
            Combatant {
                damage: spec.damage,
                attack_range: spec.attack_range,
            },
            Tint {
                color: spec.color.to_string(),
            },
            CharacterProfile {
                name: spec.name.to_string(),
                role: spec.role,
            },
            JumpState::default(),
            AttackCooldown::default(),
            AssignedTask::default(),
        ),
    )
}

/// Spawn one enemy of `wave` heading for `target`. Enemies melee, so their
/// attack range is zero; they deal damage through proximity only.
pub fn spawn_enemy(
    registry: &mut Registry,
    position: Position,
    target: Position,
    stats: &EnemyStats,
    wave: u32,
) -> EntityId {
    registry.create(
        EntityKind::Enemy,
        (
            position,
            Velocity::default(),
            Facing::default(),
            Health {
                current: stats.health,
                max: stats.health,
            },
            Mobility { speed: stats.speed },
            Combatant {
                damage: stats.damage,
                attack_range: 0.0,
            },
            Tint {
                color: ENEMY_COLOR.to_string(),
            },
            EnemyProfile {
                target,
                last_velocity: Velocity::default(),
                wave,
            },
        ),
    )
}

/// Spawn a building from the catalog at an already snapped position.
pub fn spawn_building(registry: &mut Registry, kind: BuildingKind, position: Position) -> EntityId {
    let spec = building_spec(kind);
    registry.create(
        EntityKind::Building,
        (
            position,
            Health {
                current: spec.health,
                max: spec.health,
            },
            Tint {
                color: spec.color.to_string(),
            },
            BuildingProfile {
                kind,
                size: spec.size,
                cost: spec.cost,
            },
        ),
    )
}

pub fn spawn_attack_effect(
    registry: &mut Registry,
    start: Position,
    end: Position,
    color: String,
    now_secs: f64,
    duration_secs: f64,
) -> EntityId {
    registry.create(
        EntityKind::AttackEffect,
        (AttackEffect {
            start,
            end,
            started_at_secs: now_secs,
            duration_secs,
            color,
        },),
    )
}
