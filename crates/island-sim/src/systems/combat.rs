//! Combat resolution: attacks, damage, kills and the autonomous attack
//! pass.

use log::{debug, trace};

use island_ai::steering;
use island_core::components::{AttackCooldown, Combatant, Health, Tint};
use island_core::constants::TIME_EPSILON;
use island_core::enums::EntityKind;
use island_core::error::Rejection;
use island_core::events::GameEvent;
use island_core::tuning::CombatTuning;
use island_core::types::{EntityId, Position};

use crate::ledger::ResourceLedger;
use crate::registry::Registry;
use crate::world_setup;

/// Missing entities count as incapacitated.
pub fn is_incapacitated(registry: &Registry, id: EntityId) -> bool {
    registry
        .get::<Health>(id)
        .map_or(true, |h| h.current <= 0.0)
}

/// Subtract `amount`, clamped to `[0, max]`. Returns the remaining health,
/// or `None` if the entity has no health.
pub fn apply_damage(registry: &mut Registry, id: EntityId, amount: f64) -> Option<f64> {
    let mut remaining = None;
    registry.update::<Health>(id, |h| {
        h.current = (h.current - amount).clamp(0.0, h.max);
        remaining = Some(h.current);
    });
    remaining
}

/// Remove a dead enemy and pay out the kill reward. A second call for the
/// same enemy finds nothing and pays nothing.
pub fn kill_enemy(
    registry: &mut Registry,
    ledger: &mut ResourceLedger,
    events: &mut Vec<GameEvent>,
    enemy: EntityId,
    reward: u32,
) -> bool {
    if !registry.remove(enemy) {
        return false;
    }
    ledger.credit(reward);
    events.push(GameEvent::EnemyKilled { enemy, reward });
    debug!("enemy {enemy} killed, +{reward} resources");
    true
}

/// Resolve one attack. Every precondition is checked before anything is
/// mutated.
pub fn resolve_attack(
    registry: &mut Registry,
    ledger: &mut ResourceLedger,
    events: &mut Vec<GameEvent>,
    tuning: &CombatTuning,
    now_secs: f64,
    attacker: EntityId,
    target: EntityId,
) -> Result<(), Rejection> {
    let attacker_pos = registry
        .get::<Position>(attacker)
        .ok_or(Rejection::UnknownEntity(attacker))?;
    let stats = registry
        .get::<Combatant>(attacker)
        .ok_or(Rejection::UnknownEntity(attacker))?;
    let target_pos = registry
        .get::<Position>(target)
        .ok_or(Rejection::UnknownEntity(target))?;
    registry
        .get::<Health>(target)
        .ok_or(Rejection::UnknownEntity(target))?;
    if is_incapacitated(registry, attacker) {
        return Err(Rejection::Incapacitated(attacker));
    }
    let cooldown = registry
        .get::<AttackCooldown>(attacker)
        .unwrap_or_default();
    if let Some(last) = cooldown.last_attack_secs {
        if now_secs - last + TIME_EPSILON < tuning.attack_cooldown_secs {
            return Err(Rejection::OnCooldown(attacker));
        }
    }
    if attacker_pos.range_to(&target_pos) > stats.attack_range {
        return Err(Rejection::OutOfRange { attacker, target });
    }

    let remaining = apply_damage(registry, target, stats.damage).unwrap_or(0.0);
    registry.update::<AttackCooldown>(attacker, |c| c.last_attack_secs = Some(now_secs));
    let color = registry
        .get_cloned::<Tint>(attacker)
        .map(|t| t.color)
        .unwrap_or_default();
    world_setup::spawn_attack_effect(
        registry,
        attacker_pos,
        target_pos,
        color,
        now_secs,
        tuning.effect_duration_secs,
    );
    events.push(GameEvent::AttackLanded {
        attacker,
        target,
        damage: stats.damage,
    });
    trace!("{attacker} hit {target} for {}", stats.damage);

    if remaining <= 0.0 && registry.kind_of(target) == Some(EntityKind::Enemy) {
        kill_enemy(registry, ledger, events, target, tuning.kill_reward);
    }
    Ok(())
}

/// Nearest enemy within `range` of `origin`.
pub fn nearest_enemy(registry: &Registry, origin: Position, range: f64) -> Option<EntityId> {
    let candidates = registry
        .list(EntityKind::Enemy)
        .into_iter()
        .filter_map(|id| registry.get::<Position>(id).map(|p| (id, p)));
    steering::nearest_in_range(origin, range, candidates)
}

/// Attack on behalf of the controlled character, against the nearest enemy
/// in its range. Returns the target that was hit.
pub fn player_attack(
    registry: &mut Registry,
    ledger: &mut ResourceLedger,
    events: &mut Vec<GameEvent>,
    tuning: &CombatTuning,
    now_secs: f64,
    controlled: EntityId,
) -> Result<EntityId, Rejection> {
    let origin = registry
        .get::<Position>(controlled)
        .ok_or(Rejection::UnknownEntity(controlled))?;
    let range = registry
        .get::<Combatant>(controlled)
        .map_or(0.0, |c| c.attack_range);
    let target = nearest_enemy(registry, origin, range).ok_or(Rejection::NoTarget)?;
    resolve_attack(registry, ledger, events, tuning, now_secs, controlled, target)?;
    Ok(target)
}

/// One pass of autonomous combat: every character other than the
/// controlled one attacks the nearest enemy in range, if it can.
pub fn run_autonomous(
    registry: &mut Registry,
    ledger: &mut ResourceLedger,
    events: &mut Vec<GameEvent>,
    tuning: &CombatTuning,
    now_secs: f64,
    controlled: EntityId,
) {
    for character in registry.list(EntityKind::Character) {
        if character == controlled || is_incapacitated(registry, character) {
            continue;
        }
        let (Some(origin), Some(stats)) = (
            registry.get::<Position>(character),
            registry.get::<Combatant>(character),
        ) else {
            continue;
        };
        let Some(target) = nearest_enemy(registry, origin, stats.attack_range) else {
            continue;
        };
        if let Err(rejection) =
            resolve_attack(registry, ledger, events, tuning, now_secs, character, target)
        {
            trace!("autonomous attack by {character} skipped: {rejection}");
        }
    }
}
