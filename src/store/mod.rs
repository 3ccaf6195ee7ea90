//! In-memory entity store.
//!
//! Holds the author and book collections for the lifetime of the process.
//! Nothing is written to disk.
//!
//! ## Components
//!
//! - [`EntityStore`]: the shared store handed to the GraphQL schema
//! - [`Collection`]: one append-only collection with its own id counter
//! - [`seed`]: the demo dataset loaded at startup

mod collection;
mod entity_store;
pub mod seed;

pub use collection::Collection;
pub use entity_store::EntityStore;
