//! Config file location: where `.<script>rc` lives for a given scope.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{RcError, Result};

/// Search location for a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Current working directory.
    Local,
    /// User home directory.
    Global,
    /// Explicit directory; must exist when the path is built.
    Dir(PathBuf),
}

impl Scope {
    /// Default lookup order: user-wide first, per-project last (wins).
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::Global, Self::Local]
    }

    /// Resolve the directory this scope points at.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScope` if a `Dir` scope is not an existing directory,
    /// `HomeDirUnavailable` for `Global` without a home directory, or `Io`
    /// if the working directory cannot be read.
    pub fn directory(&self) -> Result<PathBuf> {
        match self {
            Self::Local => Ok(std::env::current_dir()?),
            Self::Global => dirs::home_dir().ok_or(RcError::HomeDirUnavailable),
            Self::Dir(dir) => {
                if dir.is_dir() {
                    Ok(dir.clone())
                } else {
                    Err(RcError::InvalidScope {
                        scope: dir.display().to_string(),
                    })
                }
            }
        }
    }
}

impl FromStr for Scope {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "local" => Self::Local,
            "global" => Self::Global,
            other => Self::Dir(PathBuf::from(other)),
        })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Global => f.write_str("global"),
            Self::Dir(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// File name of the config for `script`: `.` + basename without extension + `rc`.
///
/// # Errors
///
/// Returns `InvalidScriptName` if `script` has no final path component.
pub fn rc_name(script: &str) -> Result<String> {
    let stem = Path::new(script)
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| RcError::InvalidScriptName {
            script: script.to_string(),
        })?;
    Ok(format!(".{}rc", stem.to_string_lossy()))
}

/// Build the path to the config file of `script` in `scope`.
///
/// Only computes the path; nothing is created.
///
/// # Errors
///
/// Returns `InvalidScriptName` or any error from [`Scope::directory`].
pub fn build_config_path(script: &str, scope: &Scope) -> Result<PathBuf> {
    let name = rc_name(script)?;
    Ok(scope.directory()?.join(name))
}
