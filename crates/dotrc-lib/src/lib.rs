//! `dotrc-lib` — layered `.<prog>rc` defaults for command-line arguments.
//!
//! Merges a docopt-style argument map with built-in defaults and optional
//! JSON/YAML config files found in the user's home directory, the current
//! directory, or explicit directories. Command-line values always win.
//!
//! # Quick Start
//!
//! ```no_run
//! use dotrc_lib::{ArgsMap, Format, Scope, extend_args, write_config};
//! use serde_json::json;
//!
//! // `None` marks an option the user did not pass
//! let args: ArgsMap = [
//!     ("--speed".to_string(), None),
//!     ("--force".to_string(), Some(json!("yes"))),
//! ]
//! .into();
//! let defaults = [("speed".to_string(), json!(10))].into();
//!
//! // ~/.progrc, then ./.progrc
//! let merged = extend_args(args, "prog", defaults, Scope::defaults()).unwrap();
//! assert_eq!(merged["--force"], Some(json!(true)));
//!
//! // Persist the effective options
//! let path = dotrc_lib::build_config_path("prog", &Scope::Local).unwrap();
//! write_config(&merged, &path, Format::Yaml, false).unwrap();
//! ```

pub mod coerce;
pub mod error;
pub mod key;
pub mod loader;
pub mod merge;
pub mod model;
pub mod resolver;
pub mod scope;
pub mod writer;

pub use coerce::convert_boolean_args;
pub use error::{RcError, Result};
pub use key::Key;
pub use loader::{load_config_file, parse_config};
pub use merge::{merge_docopt, simplify_args};
pub use model::{ArgsMap, Defaults, SimpleArgs, Value};
pub use resolver::{ConfigResolver, Layer, extend_args, fold_layers};
pub use scope::{Scope, build_config_path, rc_name};
pub use writer::{Format, write_config, write_config_as};
