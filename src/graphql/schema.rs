use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::store::EntityStore;

use super::types::{Author, Book, store};

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<EntityStore>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A Single Book
    async fn book(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Book>> {
        tracing::debug!(id, "Resolving book");
        Ok(store(ctx)?.book(id).map(Into::into))
    }

    /// List of All Books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = store(ctx)?.books();
        Ok(books.into_iter().map(Into::into).collect())
    }

    /// A Single Author
    async fn author(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Author>> {
        tracing::debug!(id, "Resolving author");
        Ok(store(ctx)?.author(id).map(Into::into))
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let authors = store(ctx)?.authors();
        Ok(authors.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a Book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(validator(min_length = 1))] name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let book = store(ctx)?.add_book(name, author_id)?;
        tracing::info!(id = book.id, name = %book.name, author_id, "Added book");
        Ok(book.into())
    }

    /// Add an Author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        #[graphql(validator(min_length = 1))] name: String,
    ) -> async_graphql::Result<Author> {
        let author = store(ctx)?.add_author(name)?;
        tracing::info!(id = author.id, name = %author.name, "Added author");
        Ok(author.into())
    }
}
