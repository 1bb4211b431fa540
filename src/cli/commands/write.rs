//! Write command implementation.

use anyhow::{Context, Result};
use dotrc_lib::write_config;

use super::load_mapping;
use crate::cli::WriteArgs;
use crate::config::RunConfig;

/// Execute the write command.
///
/// # Errors
///
/// Returns an error if the input is not a mapping, the destination exists
/// and `--no-overwrite` was given, or writing fails.
pub fn execute(args: &WriteArgs, config: &RunConfig, json: bool) -> Result<()> {
    let contents = load_mapping(Some(&args.input))?;
    let format = config.format_for(&args.out);

    write_config(&contents, &args.out, format, !args.no_overwrite)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    if json {
        let output = serde_json::json!({
            "path": args.out.display().to_string(),
            "format": format.as_str(),
            "keys": contents.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Wrote {} ({format})", args.out.display());
    }
    Ok(())
}
