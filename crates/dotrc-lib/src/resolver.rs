//! Layered resolution: built-in defaults < config files (in scope order) < CLI args.

use std::path::PathBuf;

use crate::coerce::convert_boolean_args;
use crate::error::Result;
use crate::loader::load_config_file;
use crate::merge::merge_docopt;
use crate::model::{ArgsMap, Defaults};
use crate::scope::{Scope, build_config_path};

/// One scope's contribution to the layered defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub scope: Scope,
    pub path: PathBuf,
    /// Whether a config file existed at `path`.
    pub found: bool,
    /// Values read from the file (empty when not found).
    pub values: Defaults,
}

/// Resolves command-line arguments against defaults and `.<script>rc` files.
///
/// ```no_run
/// use dotrc_lib::{ArgsMap, ConfigResolver, Defaults};
/// use serde_json::json;
///
/// let defaults: Defaults = [("speed".to_string(), json!(10))].into();
/// let args: ArgsMap = [("--speed".to_string(), None)].into();
///
/// let merged = ConfigResolver::new("prog")
///     .with_defaults(defaults)
///     .resolve(args)
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    script: String,
    defaults: Defaults,
    scopes: Vec<Scope>,
}

impl ConfigResolver {
    /// Resolver for `script` with no defaults and the default scopes.
    #[must_use]
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            defaults: Defaults::new(),
            scopes: Scope::defaults(),
        }
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Scopes to read, lowest precedence first.
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<Scope>) -> Self {
        self.scopes = scopes;
        self
    }

    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Load every scope's config file in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScope`/`InvalidScriptName` for a bad scope or script,
    /// `ConfigParse` for a malformed file, or `Io` if a file cannot be read.
    pub fn layers(&self) -> Result<Vec<Layer>> {
        self.scopes
            .iter()
            .map(|scope| -> Result<Layer> {
                let path = build_config_path(&self.script, scope)?;
                let loaded = load_config_file(&path)?;
                match &loaded {
                    Some(values) => tracing::debug!(
                        %scope,
                        path = %path.display(),
                        keys = values.len(),
                        "Loaded config"
                    ),
                    None => tracing::debug!(%scope, path = %path.display(), "No config file"),
                }
                Ok(Layer {
                    scope: scope.clone(),
                    path,
                    found: loaded.is_some(),
                    values: loaded.unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Fold the config layers over the built-in defaults; later scopes win.
    ///
    /// # Errors
    ///
    /// Same as [`Self::layers`].
    pub fn layered_defaults(&self) -> Result<Defaults> {
        Ok(fold_layers(self.defaults.clone(), self.layers()?))
    }

    /// Fill unset `args` from the layered defaults, after boolean coercion.
    ///
    /// # Errors
    ///
    /// Anything [`Self::layers`] returns, plus `MalformedKey`/`KeyCollision`
    /// from the merge.
    pub fn resolve(&self, args: ArgsMap) -> Result<ArgsMap> {
        let defaults = self.layered_defaults()?;
        let args = convert_boolean_args(args);
        merge_docopt(&defaults, args)
    }
}

/// Shallow-merge each layer's values over `base`, in order.
#[must_use]
pub fn fold_layers(base: Defaults, layers: impl IntoIterator<Item = Layer>) -> Defaults {
    layers.into_iter().fold(base, |mut acc, layer| {
        acc.extend(layer.values);
        acc
    })
}

/// Update command-line `args` with `defaults` and any config files found in `scopes`.
///
/// # Errors
///
/// See [`ConfigResolver::resolve`].
pub fn extend_args(
    args: ArgsMap,
    script: &str,
    defaults: Defaults,
    scopes: Vec<Scope>,
) -> Result<ArgsMap> {
    ConfigResolver::new(script)
        .with_defaults(defaults)
        .with_scopes(scopes)
        .resolve(args)
}
