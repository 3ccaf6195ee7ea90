use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_graphiql: bool,
) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }
    if no_graphiql {
        ctx.config.server.graphiql = false;
    }
    ctx.config.validate()?;

    let schema = ctx.schema();
    let settings = &ctx.config.server;
    let url = format!("http://{}:{}{}", settings.host, settings.port, settings.path);

    println!("{} {}", "Starting GraphQL server on".green(), url.cyan());
    if settings.graphiql {
        println!("{} {}", "GraphiQL:".green(), url.cyan());
    }

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, settings))
        .context("GraphQL server failed")?;
    Ok(())
}
