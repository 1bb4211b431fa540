//! Resolve command implementation.

use anyhow::{Context, Result};
use dotrc_lib::ConfigResolver;

use super::{load_args, load_mapping};
use crate::cli::ResolveArgs;
use crate::config::RunConfig;

/// Execute the resolve command: print the merged argument map as JSON.
///
/// # Errors
///
/// Returns an error if an input file is invalid or resolution fails.
pub fn execute(args: &ResolveArgs, config: &RunConfig) -> Result<()> {
    let cli_args = load_args(args.args.as_deref())?;
    let defaults = load_mapping(args.defaults.as_deref())?;

    let merged = ConfigResolver::new(args.script.as_str())
        .with_defaults(defaults)
        .with_scopes(config.scopes_or_default())
        .resolve(cli_args)
        .with_context(|| format!("Failed to resolve arguments for '{}'", args.script))?;

    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}
