use std::ops::Range;

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Entity arena backed by a flat Vec.
///
/// Entities are never removed during a session, so an `EntityId` is simply
/// the entity's index and stays valid. A level's platforms are spawned
/// back-to-back and addressed as an index range.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
        }
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity to the arena and return its id.
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        entity.id = id;
        self.entities.push(entity);
        id
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// Contiguous run of entities, e.g. one level's platforms.
    /// Out-of-range requests yield an empty slice.
    pub fn slice(&self, range: Range<usize>) -> &[Entity] {
        self.entities.get(range).unwrap_or(&[])
    }

    /// Mutable access to one entity alongside a shared view of a disjoint range.
    ///
    /// Used to move the actor against a level's platforms without copying
    /// them. Returns None if `id` falls inside `others` or out of bounds.
    pub fn split_one_mut(
        &mut self,
        id: EntityId,
        others: Range<usize>,
    ) -> Option<(&mut Entity, &[Entity])> {
        let idx = id.index();
        if idx >= self.entities.len() || others.end > self.entities.len() || others.start > others.end {
            return None;
        }
        if idx >= others.end {
            let (head, tail) = self.entities.split_at_mut(idx);
            Some((&mut tail[0], &head[others]))
        } else if idx < others.start {
            let (head, tail) = self.entities.split_at_mut(others.start);
            Some((&mut head[idx], &tail[..others.len()]))
        } else {
            None
        }
    }

    /// Set `active` on every entity in a range.
    pub fn set_active(&mut self, range: Range<usize>, active: bool) {
        if let Some(entities) = self.entities.get_mut(range) {
            for entity in entities {
                entity.active = active;
            }
        }
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Find all entities with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.tag == tag).collect()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
