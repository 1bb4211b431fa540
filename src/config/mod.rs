//! Run configuration for the `dotrc` binary.
//!
//! Options come from, in order of precedence:
//! - Command-line flags (`--scope`, `--format`)
//! - Environment variables (`DOTRC_SCOPES`, `DOTRC_FORMAT`), read by clap
//! - Built-in defaults (scopes `global,local`, format by extension or `json`)

use std::path::Path;

use dotrc_lib::{Format, Result, Scope};

use crate::cli::ScopeArgs;

/// Raw overrides gathered from the command line and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub scopes: Vec<String>,
    pub format: Option<String>,
}

impl From<&ScopeArgs> for CliOverrides {
    fn from(args: &ScopeArgs) -> Self {
        Self {
            scopes: args.scopes.clone(),
            format: None,
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Scopes in precedence order; empty when none were requested.
    pub scopes: Vec<Scope>,
    pub format: Option<Format>,
}

impl RunConfig {
    /// Validate `overrides`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for an unknown format name.
    pub fn from_overrides(overrides: &CliOverrides) -> Result<Self> {
        let scopes = overrides
            .scopes
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                let Ok(scope) = s.parse::<Scope>();
                scope
            })
            .collect();
        let format = overrides
            .format
            .as_deref()
            .map(str::parse::<Format>)
            .transpose()?;
        Ok(Self { scopes, format })
    }

    /// Requested scopes, or `global, local`.
    #[must_use]
    pub fn scopes_or_default(&self) -> Vec<Scope> {
        if self.scopes.is_empty() {
            Scope::defaults()
        } else {
            self.scopes.clone()
        }
    }

    /// Requested scopes, or just `local`.
    #[must_use]
    pub fn scopes_or_local(&self) -> Vec<Scope> {
        if self.scopes.is_empty() {
            vec![Scope::Local]
        } else {
            self.scopes.clone()
        }
    }

    /// Requested format, else guessed from `path`, else JSON.
    #[must_use]
    pub fn format_for(&self, path: &Path) -> Format {
        self.format
            .or_else(|| Format::from_path(path))
            .unwrap_or_default()
    }
}
