use super::{EntityId, ListEntity};
use crate::error::ListError;

/// Page-scoped, in-memory rows with unique identities
///
/// Seeded when a page mounts and dropped with it. Only `create`, `update` and
/// `remove` change the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<E> {
    items: Vec<E>,
}

impl<E> Default for EntityCollection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: ListEntity> EntityCollection<E> {
    /// Builds a collection from a seed snapshot.
    ///
    /// # Errors
    /// [`ListError::DuplicateId`] if two seed rows share an id.
    pub fn from_seed(seed: Vec<E>) -> Result<Self, ListError> {
        let mut collection = Self::default();
        for entity in seed {
            collection.insert(entity)?;
        }
        Ok(collection)
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    /// One past the largest id in use; never collides with a live row.
    pub fn next_id(&self) -> EntityId {
        self.items.iter().map(ListEntity::id).max().map_or(1, |max| max + 1)
    }

    pub fn insert(&mut self, entity: E) -> Result<(), ListError> {
        let id = entity.id();
        if self.get(id).is_some() {
            return Err(ListError::DuplicateId(id));
        }
        self.items.push(entity);
        Ok(())
    }

    /// Appends a row built with a fresh id and returns the row's id.
    ///
    /// # Errors
    /// [`ListError::DuplicateId`] if `build` ignores the offered id and picks
    /// one already in use; nothing is added.
    pub fn create(&mut self, build: impl FnOnce(EntityId) -> E) -> Result<EntityId, ListError> {
        let entity = build(self.next_id());
        let id = entity.id();
        self.insert(entity)?;
        Ok(id)
    }

    /// Edits a row. The edit runs on a copy and is dropped if it would give
    /// the row an id another row already has.
    pub fn update(&mut self, id: EntityId, edit: impl FnOnce(&mut E)) -> Result<(), ListError>
    where
        E: Clone,
    {
        let index = self.position(id)?;
        let mut edited = self.items[index].clone();
        edit(&mut edited);

        let new_id = edited.id();
        if new_id != id && self.get(new_id).is_some() {
            return Err(ListError::DuplicateId(new_id));
        }
        self.items[index] = edited;
        Ok(())
    }

    pub fn remove(&mut self, id: EntityId) -> Result<E, ListError> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    fn position(&self, id: EntityId) -> Result<usize, ListError> {
        self.items
            .iter()
            .position(|e| e.id() == id)
            .ok_or(ListError::NotFound(id))
    }
}
