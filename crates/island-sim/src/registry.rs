//! Entity registry: the single owner of every character, enemy, building
//! and attack effect.
//!
//! Entities live in a hecs `World`, but callers address them by
//! [`EntityId`], which is assigned monotonically and never reused. Systems
//! read through the registry each tick and write back through
//! [`Registry::update`]; nobody keeps entity copies across ticks.

use std::collections::HashMap;

use hecs::{Component, DynamicBundle, Entity, EntityBuilder, World};

use island_core::enums::EntityKind;
use island_core::types::EntityId;

pub struct Registry {
    world: World,
    handles: HashMap<EntityId, Entity>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            handles: HashMap::new(),
            next_id: 0,
        }
    }

    /// Spawn an entity of `kind` with the given components. The registry
    /// attaches the id and kind itself.
    pub fn create(&mut self, kind: EntityKind, components: impl DynamicBundle) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let mut builder = EntityBuilder::new();
        builder.add_bundle(components).add(id).add(kind);
        let entity = self.world.spawn(builder.build());
        self.handles.insert(id, entity);
        id
    }

    /// Apply a mutation to one component. Returns false without doing
    /// anything if the entity (or the component) no longer exists; that is
    /// an expected outcome when something was removed earlier in the tick.
    pub fn update<T: Component>(&mut self, id: EntityId, mutate: impl FnOnce(&mut T)) -> bool {
        let Some(&entity) = self.handles.get(&id) else {
            return false;
        };
        match self.world.get::<&mut T>(entity) {
            Ok(mut component) => {
                mutate(&mut *component);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove an entity. Returns false if it was already gone.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.handles.remove(&id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    /// Copy of one component, if the entity and component exist.
    pub fn get<T: Component + Copy>(&self, id: EntityId) -> Option<T> {
        let entity = *self.handles.get(&id)?;
        self.world.get::<&T>(entity).ok().map(|c| *c)
    }

    /// Clone of one component, for non-`Copy` data such as names and colors.
    pub fn get_cloned<T: Component + Clone>(&self, id: EntityId) -> Option<T> {
        let entity = *self.handles.get(&id)?;
        self.world.get::<&T>(entity).ok().map(|c| (*c).clone())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.get::<EntityKind>(id)
    }

    /// Ids of every live entity of `kind`, ascending.
    pub fn list(&self, kind: EntityKind) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .world
            .query::<(&EntityId, &EntityKind)>()
            .iter()
            .filter(|(_, (_, k))| **k == kind)
            .map(|(_, (id, _))| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of live entities of `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, k)| **k == kind)
            .count()
    }

    /// Read-only view of the underlying world, for snapshot queries.
    pub fn world(&self) -> &World {
        &self.world
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use island_core::components::Health;
    use island_core::types::Position;

    fn spawn_dummy(registry: &mut Registry, kind: EntityKind) -> EntityId {
        registry.create(
            kind,
            (
                Position::default(),
                Health {
                    current: 10.0,
                    max: 10.0,
                },
            ),
        )
    }

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut registry = Registry::new();
        let a = spawn_dummy(&mut registry, EntityKind::Enemy);
        let b = spawn_dummy(&mut registry, EntityKind::Building);
        let c = spawn_dummy(&mut registry, EntityKind::Enemy);
        assert!(a < b && b < c);
        assert_eq!(registry.kind_of(b), Some(EntityKind::Building));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut registry = Registry::new();
        let a = spawn_dummy(&mut registry, EntityKind::Enemy);
        assert!(registry.remove(a));
        let b = spawn_dummy(&mut registry, EntityKind::Enemy);
        assert_ne!(a, b);
        assert!(!registry.contains(a));
    }

    #[test]
    fn stale_update_and_remove_are_silent() {
        let mut registry = Registry::new();
        let a = spawn_dummy(&mut registry, EntityKind::Enemy);
        registry.remove(a);
        assert!(!registry.update::<Health>(a, |h| h.current = 0.0));
        assert!(!registry.remove(a));
        assert!(registry.get::<Health>(a).is_none());
    }

    #[test]
    fn update_missing_component_is_silent() {
        let mut registry = Registry::new();
        let a = spawn_dummy(&mut registry, EntityKind::Enemy);
        assert!(!registry.update::<f32>(a, |v| *v = 1.0));
    }

    #[test]
    fn list_filters_by_kind_in_id_order() {
        let mut registry = Registry::new();
        let e1 = spawn_dummy(&mut registry, EntityKind::Enemy);
        let _b = spawn_dummy(&mut registry, EntityKind::Building);
        let e2 = spawn_dummy(&mut registry, EntityKind::Enemy);
        assert_eq!(registry.list(EntityKind::Enemy), vec![e1, e2]);
        assert_eq!(registry.count(EntityKind::Enemy), 2);

        registry.remove(e1);
        assert_eq!(registry.list(EntityKind::Enemy), vec![e2]);
    }

    #[test]
    fn update_writes_through() {
        let mut registry = Registry::new();
        let a = spawn_dummy(&mut registry, EntityKind::Character);
        assert!(registry.update::<Position>(a, |p| p.x = 4.0));
        assert_eq!(registry.get::<Position>(a).map(|p| p.x), Some(4.0));
    }
}
