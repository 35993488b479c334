//! Snapshot system: queries the registry and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use island_ai::wave_fsm::WaveState;
use island_core::components::*;
use island_core::enums::GamePhase;
use island_core::events::GameEvent;
use island_core::state::*;
use island_core::types::{EntityId, Position, SimTime};

use crate::control::ControlState;
use crate::ledger::ResourceLedger;
use crate::registry::Registry;
use crate::systems::{build, camera};
use crate::systems::camera::CameraRig;

/// Engine-owned state the snapshot reads besides the registry.
pub struct SnapshotInput<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ledger: &'a ResourceLedger,
    pub wave: &'a WaveState,
    pub control: &'a ControlState,
    pub camera: &'a CameraRig,
}

/// Build a complete GameStateSnapshot from the current registry state.
pub fn build_snapshot(
    registry: &Registry,
    input: &SnapshotInput<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let world = registry.world();
    let now = input.time.elapsed_secs;
    let controlled = input.control.controlled;

    GameStateSnapshot {
        time: input.time,
        clock_secs: input.time.clock_secs(),
        phase: input.phase,
        resources: input.ledger.balance(),
        wave: WaveView {
            number: input.wave.wave_number,
            phase: input.wave.phase,
            incoming: input.wave.incoming(),
            phase_elapsed_secs: input.wave.elapsed_in_phase(now),
        },
        controlled: build_controlled(registry, controlled),
        control_mode: input.camera.mode,
        build_mode: input.control.build_mode,
        selected_building: input.control.selected_building,
        build_preview: build_preview(input),
        camera: camera_view(registry, controlled, input.camera),
        characters: build_characters(world, controlled),
        enemies: build_enemies(world),
        buildings: build_buildings(world),
        effects: build_effects(world, now),
        events,
    }
}

/// Camera pose for the controlled character, or the default pose if it is
/// somehow gone.
pub fn camera_view(registry: &Registry, controlled: EntityId, rig: &CameraRig) -> CameraView {
    match registry.get::<Position>(controlled) {
        Some(position) => {
            let yaw = registry.get::<Facing>(controlled).unwrap_or_default().yaw;
            camera::derive_view(rig, position, yaw)
        }
        None => CameraView::default(),
    }
}

fn build_controlled(registry: &Registry, controlled: EntityId) -> Option<ControlledView> {
    let health = registry.get::<Health>(controlled)?;
    let profile = registry.get_cloned::<CharacterProfile>(controlled)?;
    Some(ControlledView {
        id: controlled,
        name: profile.name,
        health: health.current,
        max_health: health.max,
    })
}

fn build_preview(input: &SnapshotInput<'_>) -> Option<BuildPreview> {
    if !input.control.build_mode {
        return None;
    }
    input
        .control
        .build_cursor
        .map(|cursor| build::preview(input.ledger, input.control.selected_building, cursor))
}

fn build_characters(world: &World, controlled: EntityId) -> Vec<CharacterView> {
    let mut characters: Vec<CharacterView> = world
        .query::<(
            &EntityId,
            &CharacterProfile,
            &Position,
            &Facing,
            &Health,
            &Tint,
            &JumpState,
            &AssignedTask,
        )>()
        .iter()
        .map(
            |(_, (id, profile, pos, facing, health, tint, jump, task))| CharacterView {
                id: *id,
                name: profile.name.clone(),
                role: profile.role,
                color: tint.color.clone(),
                position: *pos,
                yaw: facing.yaw,
                health: health.current,
                max_health: health.max,
                airborne: jump.airborne,
                task: task.task,
                controlled: *id == controlled,
            },
        )
        .collect();
    characters.sort_by_key(|c| c.id);
    characters
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EntityId, &EnemyProfile, &Position, &Facing, &Health, &Tint)>()
        .iter()
        .map(|(_, (id, profile, pos, facing, health, tint))| EnemyView {
            id: *id,
            position: *pos,
            yaw: facing.yaw,
            health: health.current,
            max_health: health.max,
            target: profile.target,
            wave: profile.wave,
            color: tint.color.clone(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_buildings(world: &World) -> Vec<BuildingView> {
    let mut buildings: Vec<BuildingView> = world
        .query::<(&EntityId, &BuildingProfile, &Position, &Health, &Tint)>()
        .iter()
        .map(|(_, (id, profile, pos, health, tint))| BuildingView {
            id: *id,
            kind: profile.kind,
            position: *pos,
            size: profile.size,
            health: health.current,
            max_health: health.max,
            color: tint.color.clone(),
        })
        .collect();
    buildings.sort_by_key(|b| b.id);
    buildings
}

fn build_effects(world: &World, now: f64) -> Vec<EffectView> {
    let mut effects: Vec<EffectView> = world
        .query::<(&EntityId, &AttackEffect)>()
        .iter()
        .map(|(_, (id, effect))| EffectView {
            id: *id,
            start: effect.start,
            end: effect.end,
            elapsed_secs: (now - effect.started_at_secs).max(0.0),
            duration_secs: effect.duration_secs,
            color: effect.color.clone(),
        })
        .collect();
    effects.sort_by_key(|e| e.id);
    effects
}
