mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::error::Result;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::store::EntityStore;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub store: Arc<EntityStore>,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Result<Self> {
        let store = if config.store.seed {
            EntityStore::seeded()?
        } else {
            EntityStore::new()
        };
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    pub fn schema(&self) -> BookshelfSchema {
        build_schema(Arc::clone(&self.store))
    }
}
