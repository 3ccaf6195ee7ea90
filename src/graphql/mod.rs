//! GraphQL schema, resolvers and HTTP transport.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server with the GraphiQL explorer on /graphql
//! bookshelf serve --port 3000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ author(id: 1) { name books { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addBook(name: "The Hobbit", authorId: 2) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Types**: `Book` (with `author`), `Author` (with `books`)
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server, serve};
pub use types::{Author, Book};
