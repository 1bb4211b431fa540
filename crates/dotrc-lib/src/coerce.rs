//! Boolean-like string coercion.

use crate::model::{ArgsMap, Defaults, Value};

/// Interpret a string as a boolean: yes/true -> `true`, no/false -> `false`
/// (ASCII case-insensitive). Anything else is not boolean-like.
#[must_use]
pub fn parse_bool_like(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("no") || s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// YAML 1.1 boolean words: [`parse_bool_like`] plus on/off.
#[must_use]
pub fn parse_yaml11_bool(s: &str) -> Option<bool> {
    parse_bool_like(s).or_else(|| {
        if s.eq_ignore_ascii_case("on") {
            Some(true)
        } else if s.eq_ignore_ascii_case("off") {
            Some(false)
        } else {
            None
        }
    })
}

/// Replace a boolean-like string value with a real boolean.
pub fn coerce_value(value: &mut Value) {
    if let Value::String(s) = value {
        if let Some(b) = parse_bool_like(s) {
            *value = Value::Bool(b);
        }
    }
}

/// Converts boolean-like strings among `args` values into booleans.
///
/// Absent values and non-string values are left untouched.
#[must_use]
pub fn convert_boolean_args(mut args: ArgsMap) -> ArgsMap {
    for value in args.values_mut().flatten() {
        coerce_value(value);
    }
    args
}

/// Converts top-level YAML 1.1 boolean words among config `values`.
///
/// Nested mappings and sequences are left untouched.
pub fn convert_config_booleans(values: &mut Defaults) {
    for value in values.values_mut() {
        if let Value::String(s) = value {
            if let Some(b) = parse_yaml11_bool(s) {
                *value = Value::Bool(b);
            }
        }
    }
}
