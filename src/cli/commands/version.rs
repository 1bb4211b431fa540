//! Version command implementation.

use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if json {
        let build = if cfg!(debug_assertions) {
            "dev"
        } else {
            "release"
        };
        let output = VersionOutput { version, build };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("dotrc {version}");
    }
    Ok(())
}
