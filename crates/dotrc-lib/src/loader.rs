//! Reading config files.
//!
//! YAML is a superset of JSON, so one parser handles both formats.

use std::fs;
use std::path::Path;

use crate::coerce::convert_config_booleans;
use crate::error::{RcError, Result};
use crate::model::Defaults;

/// Parse config text into a mapping. `path` is only used for error reporting.
///
/// An empty (or comment-only) document is an empty mapping. Top-level
/// YAML 1.1 boolean words (`yes`, `no`, `on`, `off`, ...) become booleans.
///
/// # Errors
///
/// Returns `ConfigParse` if the text is not valid YAML/JSON, the top level
/// is not a mapping, or a key is not a string.
pub fn parse_config(path: &Path, text: &str) -> Result<Defaults> {
    let blank = text
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if blank {
        return Ok(Defaults::new());
    }

    let doc: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| RcError::config_parse(path, e.to_string()))?;

    if !doc.is_mapping() {
        return Err(RcError::config_parse(
            path,
            format!("top level must be a mapping, found {}", kind_of(&doc)),
        ));
    }
    let mut values: Defaults =
        serde_yaml::from_value(doc).map_err(|e| RcError::config_parse(path, e.to_string()))?;
    convert_config_booleans(&mut values);
    Ok(values)
}

/// Load the config file at `path`, or `None` if it does not exist.
///
/// # Errors
///
/// Returns `Io` if the file exists but cannot be read, or `ConfigParse`
/// if its content is invalid.
pub fn load_config_file(path: &Path) -> Result<Option<Defaults>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(RcError::Io(e)),
    };
    parse_config(path, &text).map(Some)
}

const fn kind_of(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
