//! Data models for the bookshelf.
//!
//! - [`Author`]: a writer, owning zero or more books by reference
//! - [`Book`]: a title pointing at its author through `author_id`
//!
//! Neither type stores the other. The relationship is recovered by lookup in
//! the [`EntityStore`](crate::store::EntityStore).

mod author;
mod book;

pub use author::Author;
pub use book::Book;

/// Anything kept in a store collection, addressable by an integer id.
pub trait Entity: Clone {
    fn id(&self) -> i32;
}
