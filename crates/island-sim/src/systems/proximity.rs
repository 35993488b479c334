//! Passive proximity damage between enemies and whatever they reach.
//!
//! Runs every tick. Enemies wear down buildings and characters close to
//! them; each character in reach chips the enemy in return.

use log::trace;

use island_core::components::Combatant;
use island_core::enums::EntityKind;
use island_core::events::GameEvent;
use island_core::tuning::CombatTuning;
use island_core::types::{EntityId, Position};

use crate::ledger::ResourceLedger;
use crate::registry::Registry;
use crate::systems::combat;

pub fn run(
    registry: &mut Registry,
    ledger: &mut ResourceLedger,
    events: &mut Vec<GameEvent>,
    tuning: &CombatTuning,
) {
    let buildings = positions_of(registry, EntityKind::Building);
    let characters = positions_of(registry, EntityKind::Character);

    for enemy in registry.list(EntityKind::Enemy) {
        let (Some(position), Some(stats)) = (
            registry.get::<Position>(enemy),
            registry.get::<Combatant>(enemy),
        ) else {
            continue;
        };
        let wear = stats.damage * tuning.proximity_damage_fraction;

        for &(building, at) in &buildings {
            if position.range_to(&at) < tuning.building_proximity {
                combat::apply_damage(registry, building, wear);
            }
        }

        let mut chip = 0.0;
        for &(character, at) in &characters {
            if position.range_to(&at) >= tuning.character_proximity
                || combat::is_incapacitated(registry, character)
            {
                continue;
            }
            combat::apply_damage(registry, character, wear);
            chip += tuning.retaliation_chip;
        }

        if chip > 0.0 {
            let remaining = combat::apply_damage(registry, enemy, chip);
            trace!("enemy {enemy} takes {chip} retaliation");
            if remaining.is_some_and(|h| h <= 0.0) {
                combat::kill_enemy(registry, ledger, events, enemy, tuning.kill_reward);
            }
        }
    }
}

fn positions_of(registry: &Registry, kind: EntityKind) -> Vec<(EntityId, Position)> {
    registry
        .list(kind)
        .into_iter()
        .filter_map(|id| registry.get::<Position>(id).map(|p| (id, p)))
        .collect()
}
