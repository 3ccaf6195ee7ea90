use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use super::CommandContext;

pub fn parse_variables(variables: Option<String>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(Variables::default()),
    }
}

/// Run `document` against the context's schema and print the JSON response.
///
/// Fails after printing if the response carries any GraphQL errors.
pub fn execute_and_print(ctx: &CommandContext, document: &str, variables: Variables) -> Result<()> {
    let schema = ctx.schema();
    let request = Request::new(document).variables(variables);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("Request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
