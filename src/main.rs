use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let mut config = BookshelfConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    if cli.no_seed {
        config.store.seed = false;
    }

    let ctx = CommandContext::new(config).context("Failed to build entity store")?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(ctx, host, port, no_graphiql),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
