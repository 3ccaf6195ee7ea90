use crate::error::{BookshelfError, Result};
use crate::model::Entity;

/// An append-only list of entities with a monotonic id counter.
///
/// The counter never goes backwards and does not depend on how many items
/// are currently held, so ids stay unique even if removal is added later.
/// Ids are GraphQL `Int`s, so a collection holds at most `i32::MAX` entities.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Reserves the next id, builds the entity with it and appends it.
    ///
    /// Callers hold the collection's write lock for the whole call, so id
    /// assignment and insertion cannot interleave with another insert.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> Result<T> {
        let id = self.next_id.ok_or(BookshelfError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        let entity = build(id);
        self.items.push(entity.clone());
        Ok(entity)
    }

    pub fn find_by_id(&self, id: i32) -> Option<T> {
        self.items.iter().find(|e| e.id() == id).cloned()
    }

    /// All entities matching `predicate`, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.iter().filter(|&e| predicate(e)).cloned().collect()
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}
