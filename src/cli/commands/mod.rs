//! Command implementations.

pub mod path;
pub mod resolve;
pub mod save;
pub mod show;
pub mod version;
pub mod write;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use dotrc_lib::{ArgsMap, Defaults, parse_config};

/// Read a file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load a decorated argument map (JSON, `null` = unset). No file means no arguments.
pub(crate) fn load_args(path: Option<&Path>) -> Result<ArgsMap> {
    let Some(path) = path else {
        return Ok(ArgsMap::new());
    };
    let text = read_input(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid argument map in {}", path.display()))
}

/// Load a simple-key mapping from a JSON/YAML file.
pub(crate) fn load_mapping(path: Option<&Path>) -> Result<Defaults> {
    let Some(path) = path else {
        return Ok(Defaults::new());
    };
    let text = read_input(path)?;
    Ok(parse_config(path, &text)?)
}
