//! Save command implementation.

use anyhow::{Context, Result};
use dotrc_lib::{Defaults, Scope, build_config_path, simplify_args, write_config};

use super::load_args;
use crate::cli::SaveArgs;
use crate::config::RunConfig;

/// Execute the save command: write the supplied arguments, under simple
/// keys, to the rc file of the chosen scope.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the scope is invalid, or
/// the file cannot be written.
pub fn execute(args: &SaveArgs, config: &RunConfig, json: bool) -> Result<()> {
    let scope = config.scopes.first().cloned().unwrap_or(Scope::Local);
    let path = build_config_path(&args.script, &scope)?;

    let cli_args = load_args(args.args.as_deref())?;
    let contents: Defaults = simplify_args(&cli_args)?
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect();

    let format = config.format_for(&path);
    write_config(&contents, &path, format, !args.no_overwrite)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    tracing::info!(path = %path.display(), keys = contents.len(), "Saved config");

    if json {
        let output = serde_json::json!({
            "scope": scope.to_string(),
            "path": path.display().to_string(),
            "format": format.as_str(),
            "keys": contents.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Saved {} keys to {}", contents.len(), path.display());
    }
    Ok(())
}
