//! Merging simple-key defaults into decorated-key (docopt style) arguments.

use std::collections::BTreeMap;

use crate::coerce::coerce_value;
use crate::error::{RcError, Result};
use crate::key::Key;
use crate::model::{ArgsMap, Defaults, SimpleArgs};

/// Fail if two decorated keys in `args` share a simple name (`--name` vs `<name>`).
///
/// # Errors
///
/// Returns `KeyCollision` naming both keys.
pub fn check_collisions(args: &ArgsMap) -> Result<()> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for raw in args.keys() {
        let Some(key) = Key::parse(raw) else {
            continue;
        };
        let simple = key.into_simple();
        if let Some(first) = seen.insert(simple.clone(), raw) {
            return Err(RcError::KeyCollision {
                simple,
                first: first.to_string(),
                second: raw.clone(),
            });
        }
    }
    Ok(())
}

/// Fill unset arguments from `defaults`.
///
/// Every absent entry whose simple name is present in `defaults` takes the
/// default value. Supplied values always win, and no keys are added.
///
/// # Errors
///
/// Returns `MalformedKey` for an absent entry that is neither `--name` nor
/// `<name>`, or `KeyCollision` if two keys share a simple name.
pub fn merge_docopt(defaults: &Defaults, mut args: ArgsMap) -> Result<ArgsMap> {
    check_collisions(&args)?;

    for (raw, value) in &mut args {
        if value.is_some() {
            continue;
        }
        let key: Key = raw.parse()?;
        if let Some(default) = defaults.get(key.simple()) {
            tracing::trace!(key = %raw, "filled from defaults");
            *value = Some(default.clone());
        }
    }

    Ok(args)
}

/// Strip decoration from every key and coerce boolean-like strings.
///
/// `--speed` becomes `speed`, `<name>` becomes `name`, and undecorated docopt
/// commands keep their key. Absent values stay absent.
///
/// # Errors
///
/// Returns `KeyCollision` if two keys end up with the same simple name.
pub fn simplify_args(args: &ArgsMap) -> Result<SimpleArgs> {
    let mut simple = SimpleArgs::new();
    let mut origin: BTreeMap<String, &str> = BTreeMap::new();

    for (raw, value) in args {
        let name = Key::parse(raw).map_or_else(|| raw.clone(), Key::into_simple);
        if let Some(first) = origin.insert(name.clone(), raw) {
            return Err(RcError::KeyCollision {
                simple: name,
                first: first.to_string(),
                second: raw.clone(),
            });
        }
        let mut value = value.clone();
        if let Some(v) = value.as_mut() {
            coerce_value(v);
        }
        simple.insert(name, value);
    }

    Ok(simple)
}
