use anyhow::Result;

use super::CommandContext;
use super::utils::{execute_and_print, parse_variables};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let vars = parse_variables(variables)?;

    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    execute_and_print(&ctx, &document, vars)
}
