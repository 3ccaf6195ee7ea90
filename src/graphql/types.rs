use std::sync::Arc;

use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model::{Author as ModelAuthor, Book as ModelBook};
use crate::store::EntityStore;

/// Fetch the shared store from the request context.
pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<EntityStore>> {
    ctx.data::<Arc<EntityStore>>()
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author of this book, or null if `authorId` matches no author
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = store(ctx)?.author(self.author_id);
        if author.is_none() {
            tracing::debug!(book = self.id, author_id = self.author_id, "Orphan book");
        }
        Ok(author.map(Into::into))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

/// This represents an author of a book
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author, in the order they were added
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = store(ctx)?.books_by_author(self.id);
        Ok(books.into_iter().map(Into::into).collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
