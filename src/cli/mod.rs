//! Command-line interface for `dotrc`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotrc_lib::RcError;

use crate::config::{CliOverrides, RunConfig};
use crate::logging;

/// `dotrc` - layered `.<prog>rc` defaults for command-line tools.
#[derive(Parser, Debug)]
#[command(name = "dotrc")]
#[command(
    author,
    version,
    about = "Merge command-line arguments with ~/.<prog>rc and ./.<prog>rc defaults",
    long_about = None,
    after_help = "Precedence: built-in defaults < global config < local config < CLI args."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the config file path for each scope
    Path(PathArgs),

    /// Fill unset arguments from defaults and config files
    Resolve(ResolveArgs),

    /// Show each config layer and the folded defaults
    Show(ShowArgs),

    /// Write a JSON/YAML mapping as a config file
    Write(WriteArgs),

    /// Save arguments (as simple keys) to a script's rc file
    Save(SaveArgs),

    /// Show version information
    Version,
}

/// Scope selection shared by lookup commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Scope to search: local, global, or a directory (repeatable, comma-separated)
    #[arg(
        long = "scope",
        value_name = "SCOPE",
        env = "DOTRC_SCOPES",
        value_delimiter = ','
    )]
    pub scopes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Program name (defines .<script>rc)
    pub script: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Program name (defines .<script>rc)
    pub script: String,

    /// JSON file with decorated arguments (`-` for stdin); null marks an unset option
    #[arg(long, value_name = "FILE")]
    pub args: Option<PathBuf>,

    /// JSON/YAML file with built-in defaults (simple keys)
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Program name (defines .<script>rc)
    pub script: String,

    /// JSON/YAML file with built-in defaults (simple keys)
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// JSON/YAML file with the mapping to write (`-` for stdin)
    pub input: PathBuf,

    /// Destination path
    pub out: PathBuf,

    /// Output format: json or yaml (default: from extension, else json)
    #[arg(long, env = "DOTRC_FORMAT")]
    pub format: Option<String>,

    /// Refuse to replace an existing file
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Program name (defines .<script>rc)
    pub script: String,

    /// JSON file with decorated arguments (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub args: Option<PathBuf>,

    /// Scope to save into: local, global, or a directory
    #[arg(long, default_value = "local")]
    pub scope: String,

    /// Output format: json or yaml
    #[arg(long, env = "DOTRC_FORMAT")]
    pub format: Option<String>,

    /// Refuse to replace an existing file
    #[arg(long)]
    pub no_overwrite: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let json = cli.json;
    match dispatch(cli) {
        Err(e) if json => {
            print_json_error(&e);
            std::process::exit(1);
        }
        other => other,
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let json = cli.json;
    let Some(command) = cli.command else {
        println!("dotrc - layered .<prog>rc defaults. Use --help for usage.");
        return Ok(());
    };
    tracing::debug!(command = command.name(), "Running command");

    match command {
        Commands::Path(args) => {
            let config = RunConfig::from_overrides(&CliOverrides::from(&args.scope))?;
            commands::path::execute(&args.script, &config.scopes_or_local(), json)
        }
        Commands::Resolve(args) => {
            let config = RunConfig::from_overrides(&CliOverrides::from(&args.scope))?;
            commands::resolve::execute(&args, &config)
        }
        Commands::Show(args) => {
            let config = RunConfig::from_overrides(&CliOverrides::from(&args.scope))?;
            commands::show::execute(&args, &config, json)
        }
        Commands::Write(args) => {
            let config = RunConfig::from_overrides(&CliOverrides {
                format: args.format.clone(),
                ..CliOverrides::default()
            })?;
            commands::write::execute(&args, &config, json)
        }
        Commands::Save(args) => {
            let config = RunConfig::from_overrides(&CliOverrides {
                scopes: vec![args.scope.clone()],
                format: args.format.clone(),
            })?;
            commands::save::execute(&args, &config, json)
        }
        Commands::Version => commands::version::execute(json),
    }
}

fn print_json_error(err: &anyhow::Error) {
    let kind = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<RcError>())
        .map_or("error", RcError::kind);
    let payload = serde_json::json!({
        "error": {
            "kind": kind,
            "message": format!("{err:#}"),
        }
    });
    eprintln!("{payload}");
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Resolve(_) => "resolve",
            Self::Show(_) => "show",
            Self::Write(_) => "write",
            Self::Save(_) => "save",
            Self::Version => "version",
        }
    }
}
