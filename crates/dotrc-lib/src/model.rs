//! Mapping types shared by every resolver stage.
//!
//! Values are JSON-shaped (`serde_json::Value`) since both input formats
//! parse into that model and both output formats serialize from it.

use std::collections::BTreeMap;

pub use serde_json::Value;

/// Simple option name -> default value.
pub type Defaults = BTreeMap<String, Value>;

/// Decorated argument key -> value, `None` when the user did not supply it.
///
/// Deserializing from JSON maps `null` to `None`, matching the docopt
/// convention for unset options.
pub type ArgsMap = BTreeMap<String, Option<Value>>;

/// Simple option name -> value, as produced by [`crate::merge::simplify_args`].
pub type SimpleArgs = BTreeMap<String, Option<Value>>;
