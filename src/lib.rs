//! # Bookshelf - an in-memory GraphQL API for authors and books
//!
//! Two related collections live in process memory: authors and books. Each
//! book resolves its author and each author resolves its books. Nothing is
//! persisted; every process starts from the demo dataset (or empty).
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:3000/graphql with GraphiQL
//! bookshelf serve
//!
//! # One-off query against a fresh store
//! bookshelf query '{ books { name author { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP transport
//! - [`model`]: Data models (`Author`, `Book`)
//! - [`store`]: In-memory entity store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// In-memory storage layer.
///
/// Owns the collections and assigns ids.
pub mod store;

pub mod logging;
