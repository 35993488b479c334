//! Cleanup system: expires attack effects and sweeps dead enemies.

use island_core::components::{AttackEffect, Health};
use island_core::constants::TIME_EPSILON;
use island_core::enums::EntityKind;
use island_core::types::EntityId;

use crate::registry::Registry;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(registry: &mut Registry, now_secs: f64, despawn_buffer: &mut Vec<EntityId>) {
    despawn_buffer.clear();

    for (_entity, (id, effect)) in registry
        .world()
        .query::<(&EntityId, &AttackEffect)>()
        .iter()
    {
        if now_secs - effect.started_at_secs + TIME_EPSILON >= effect.duration_secs {
            despawn_buffer.push(*id);
        }
    }

    // Enemies are removed the moment they die; this catches any that were
    // zeroed outside the combat paths.
    for (_entity, (id, kind, health)) in registry
        .world()
        .query::<(&EntityId, &EntityKind, &Health)>()
        .iter()
    {
        if *kind == EntityKind::Enemy && health.current <= 0.0 {
            despawn_buffer.push(*id);
        }
    }

    for id in despawn_buffer.drain(..) {
        registry.remove(id);
    }
}
