//! Scene registry trait and in-memory implementation
//!
//! The registry is a generic object store keyed by name and id with typed
//! lookups for model, transform and color-table entities. The host
//! application provides the real store; [`InMemoryScene`] stands in for it
//! in tests and headless runs.

use crate::entity::*;
use pointersim_core::{Error, Result};
use std::collections::HashMap;

/// Capability set of the externally owned scene store
pub trait SceneRegistry {
    /// Register an entity. Names are unique within a scene.
    fn add_entity(&mut self, entity: Entity) -> Result<EntityId>;

    /// Look up an entity by id
    fn entity(&self, id: EntityId) -> Option<&Entity>;

    /// Look up an entity by id, mutably
    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity>;

    /// Find an entity id by its user-facing name
    fn find_by_name(&self, name: &str) -> Option<EntityId>;

    /// Remove an entity, returning it
    fn remove_entity(&mut self, id: EntityId) -> Result<Entity>;

    /// Number of registered entities
    fn entity_count(&self) -> usize;

    /// Typed lookup: model entity
    fn model(&self, id: EntityId) -> Option<&ModelEntity> {
        match self.entity(id) {
            Some(Entity::Model(m)) => Some(m),
            _ => None,
        }
    }

    /// Typed lookup: model entity, mutably
    fn model_mut(&mut self, id: EntityId) -> Option<&mut ModelEntity> {
        match self.entity_mut(id) {
            Some(Entity::Model(m)) => Some(m),
            _ => None,
        }
    }

    /// Typed lookup: transform entity
    fn transform(&self, id: EntityId) -> Option<&TransformEntity> {
        match self.entity(id) {
            Some(Entity::Transform(t)) => Some(t),
            _ => None,
        }
    }

    /// Typed lookup: transform entity, mutably
    fn transform_mut(&mut self, id: EntityId) -> Option<&mut TransformEntity> {
        match self.entity_mut(id) {
            Some(Entity::Transform(t)) => Some(t),
            _ => None,
        }
    }

    /// Typed lookup: color table entity
    fn color_table(&self, id: EntityId) -> Option<&ColorTableEntity> {
        match self.entity(id) {
            Some(Entity::ColorTable(c)) => Some(c),
            _ => None,
        }
    }
}

/// In-memory scene store
#[derive(Debug, Default)]
pub struct InMemoryScene {
    entities: HashMap<EntityId, Entity>,
    names: HashMap<String, EntityId>,
    next_id: u64,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneRegistry for InMemoryScene {
    fn add_entity(&mut self, entity: Entity) -> Result<EntityId> {
        let name = entity.name().to_string();
        if self.names.contains_key(&name) {
            return Err(Error::DuplicateEntity(name));
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.names.insert(name, id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    fn find_by_name(&self, name: &str) -> Option<EntityId> {
        self.names.get(name).copied()
    }

    fn remove_entity(&mut self, id: EntityId) -> Result<Entity> {
        let entity = self
            .entities
            .remove(&id)
            .ok_or_else(|| Error::EntityNotFound(format!("{:?}", id)))?;
        self.names.remove(entity.name());
        Ok(entity)
    }

    fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
