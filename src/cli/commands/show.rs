//! Show command implementation.

use anyhow::{Context, Result};
use dotrc_lib::{ConfigResolver, Defaults, Layer, fold_layers};
use serde::Serialize;

use super::load_mapping;
use crate::cli::ShowArgs;
use crate::config::RunConfig;

#[derive(Serialize)]
struct LayerOutput<'a> {
    scope: String,
    path: String,
    found: bool,
    values: &'a Defaults,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    layers: Vec<LayerOutput<'a>>,
    defaults: &'a Defaults,
}

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if a scope is invalid or a config file is malformed.
pub fn execute(args: &ShowArgs, config: &RunConfig, json: bool) -> Result<()> {
    let builtin = load_mapping(args.defaults.as_deref())?;
    let resolver = ConfigResolver::new(args.script.as_str())
        .with_defaults(builtin.clone())
        .with_scopes(config.scopes_or_default());

    let layers = resolver
        .layers()
        .with_context(|| format!("Failed to load config layers for '{}'", args.script))?;
    let folded = fold_layers(builtin, layers.iter().cloned());

    if json {
        let output = ShowOutput {
            layers: layers.iter().map(layer_output).collect(),
            defaults: &folded,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", render_text(&layers, &folded));
    Ok(())
}

fn layer_output(layer: &Layer) -> LayerOutput<'_> {
    LayerOutput {
        scope: layer.scope.to_string(),
        path: layer.path.display().to_string(),
        found: layer.found,
        values: &layer.values,
    }
}

fn render_text(layers: &[Layer], folded: &Defaults) -> String {
    let width = layers
        .iter()
        .map(|layer| layer.scope.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for layer in layers {
        let status = if layer.found {
            format!("{} keys", layer.values.len())
        } else {
            "missing".to_string()
        };
        out.push_str(&format!(
            "{:<width$}  {}  ({status})\n",
            layer.scope.to_string(),
            layer.path.display(),
        ));
    }

    if !folded.is_empty() {
        out.push('\n');
        for (key, value) in folded {
            out.push_str(&format!("{key} = {value}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotrc_lib::Scope;
    use serde_json::json;
    use std::path::PathBuf;
    use tracing::info;

    fn init_logging() {
        crate::logging::init_test_logging();
    }

    #[test]
    fn test_render_text_lists_layers_then_values() {
        init_logging();
        info!("test_render_text_lists_layers_then_values: starting");
        let layers = vec![
            Layer {
                scope: Scope::Global,
                path: PathBuf::from("/home/u/.progrc"),
                found: false,
                values: Defaults::new(),
            },
            Layer {
                scope: Scope::Local,
                path: PathBuf::from("/work/.progrc"),
                found: true,
                values: [("speed".to_string(), json!(30))].into(),
            },
        ];
        let folded = fold_layers(Defaults::new(), layers.iter().cloned());

        let text = render_text(&layers, &folded);
        assert_eq!(
            text,
            "global  /home/u/.progrc  (missing)\n\
             local   /work/.progrc  (1 keys)\n\
             \n\
             speed = 30\n"
        );
        info!("test_render_text_lists_layers_then_values: assertions passed");
    }
}
