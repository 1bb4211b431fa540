//! Path command implementation.

use anyhow::Result;
use dotrc_lib::{Scope, build_config_path};
use serde::Serialize;

#[derive(Serialize)]
struct PathOutput {
    scope: String,
    path: String,
    exists: bool,
}

/// Execute the path command.
///
/// # Errors
///
/// Returns an error if a scope or the script name is invalid.
pub fn execute(script: &str, scopes: &[Scope], json: bool) -> Result<()> {
    let entries = scopes
        .iter()
        .map(|scope| -> Result<PathOutput> {
            let path = build_config_path(script, scope)?;
            Ok(PathOutput {
                scope: scope.to_string(),
                exists: path.exists(),
                path: path.display().to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", entry.path);
        }
    }
    Ok(())
}
