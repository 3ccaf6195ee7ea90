use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL API for authors and their books"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "BOOKSHELF_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Start from an empty store instead of the demo authors and books
    #[arg(long, global = true)]
    pub no_seed: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "BOOKSHELF_PORT")]
        port: Option<u16>,

        /// Do not serve the GraphiQL explorer
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a fresh store
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in GraphQL SDL
    Schema,
}
