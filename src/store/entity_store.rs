use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Collection, seed};
use crate::error::Result;
use crate::model::{Author, Book};

/// Owns the author and book collections.
///
/// Constructed once at startup and shared behind an `Arc`. Each collection
/// has its own lock. Reads clone a snapshot under the read lock. Inserts
/// take the write lock for both id assignment and the push.
#[derive(Debug, Default)]
pub struct EntityStore {
    authors: RwLock<Collection<Author>>,
    books: RwLock<Collection<Book>>,
}

impl EntityStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the demo authors and books.
    pub fn seeded() -> Result<Self> {
        let store = Self::new();
        for name in seed::AUTHORS {
            store.add_author(*name)?;
        }
        for (name, author_id) in seed::BOOKS {
            store.add_book(*name, *author_id)?;
        }
        tracing::debug!(
            authors = seed::AUTHORS.len(),
            books = seed::BOOKS.len(),
            "Seeded entity store"
        );
        Ok(store)
    }

    pub fn add_author(&self, name: impl Into<String>) -> Result<Author> {
        let name = name.into();
        write(&self.authors).insert_with(|id| Author::new(id, name))
    }

    /// Appends a book. `author_id` is not checked, so orphans are allowed.
    pub fn add_book(&self, name: impl Into<String>, author_id: i32) -> Result<Book> {
        let name = name.into();
        write(&self.books).insert_with(|id| Book::new(id, name, author_id))
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        read(&self.authors).find_by_id(id)
    }

    pub fn book(&self, id: i32) -> Option<Book> {
        read(&self.books).find_by_id(id)
    }

    pub fn authors(&self) -> Vec<Author> {
        read(&self.authors).snapshot()
    }

    pub fn books(&self) -> Vec<Book> {
        read(&self.books).snapshot()
    }

    /// Every book whose `author_id` matches, in insertion order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        read(&self.books).filter(|b| b.is_by(author_id))
    }
}

// The collections are append-only, so a panic mid-insert cannot leave them
// half-written; a poisoned lock is still safe to use.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_seeded_contents() {
        let store = EntityStore::seeded().unwrap();

        assert_eq!(store.authors().len(), 3);
        assert_eq!(store.books().len(), 8);
        assert_eq!(store.author(1).unwrap().name, "J. K. Rowling");
        assert_eq!(store.book(4).unwrap().name, "The Fellowship of the Ring");
    }

    #[test]
    fn test_books_by_author() {
        let store = EntityStore::seeded().unwrap();

        let ids: Vec<_> = store.books_by_author(1).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(store.books_by_author(42).is_empty());
    }

    #[test]
    fn test_add_book_assigns_next_id() {
        let store = EntityStore::seeded().unwrap();
        let book = store.add_book("The Silmarillion", 2).unwrap();

        assert_eq!(book.id, 9);
        assert_eq!(store.book(9), Some(book));
        assert_eq!(store.books_by_author(2).len(), 4);
    }

    #[test]
    fn test_orphan_book_is_stored() {
        let store = EntityStore::new();
        let book = store.add_book("Nobody's Book", 9999).unwrap();

        assert_eq!(book.id, 1);
        assert!(store.author(9999).is_none());
        assert_eq!(store.books_by_author(9999), vec![book]);
    }

    #[test]
    fn test_collections_have_independent_counters() {
        let store = EntityStore::new();
        store.add_book("One", 1).unwrap();
        store.add_book("Two", 1).unwrap();
        let author = store.add_author("First Author").unwrap();

        assert_eq!(author.id, 1);
    }

    #[test]
    fn test_concurrent_inserts_get_unique_ids() {
        let store = Arc::new(EntityStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.add_author(format!("author-{t}-{i}")).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<i32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let unique: HashSet<_> = ids.iter().copied().collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(unique.len(), 400);
        assert_eq!(store.authors().len(), 400);
        assert_eq!(unique.iter().max(), Some(&400));
    }
}
