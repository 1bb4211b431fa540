//! `dotrc` - layered `.<prog>rc` defaults for command-line tools
//!
//! This crate provides the `dotrc` CLI on top of [`dotrc_lib`], which holds
//! the resolver itself.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Run configuration (flags and `DOTRC_*` environment)
//! - [`logging`] - `tracing` subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod logging;

pub use dotrc_lib::{RcError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
