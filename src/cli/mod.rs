//! Command-line interface for the bookshelf binary.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
