//! Error types for `dotrc-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for dotrc-lib operations.
#[derive(Error, Debug)]
pub enum RcError {
    // === Path Errors ===
    /// Scope is not `local`, `global`, or an existing directory.
    #[error("'{scope}' must be either 'local', 'global' or an existing directory path")]
    InvalidScope { scope: String },

    /// No file name could be derived from the script name.
    #[error("Cannot derive a config name from script '{script}'")]
    InvalidScriptName { script: String },

    /// The OS did not report a home directory for the `global` scope.
    #[error("Home directory could not be determined")]
    HomeDirUnavailable,

    // === Config File Errors ===
    /// Config file exists but is not a valid YAML/JSON mapping.
    #[error("Failed to parse config file {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    // === Argument Errors ===
    /// Absent-valued key is neither `--name` nor `<name>`.
    #[error("Cannot derive a simple key from argument '{key}'")]
    MalformedKey { key: String },

    /// Two decorated keys map onto the same simple key.
    #[error("Arguments '{first}' and '{second}' both map to '{simple}'")]
    KeyCollision {
        simple: String,
        first: String,
        second: String,
    },

    // === Write Errors ===
    /// Requested serialization format is not supported.
    #[error("Only format 'json'/'yaml' is supported, not: {format}")]
    UnsupportedFormat { format: String },

    /// Overwrite was refused for an existing file.
    #[error("{} already exists", path.display())]
    FileExists { path: PathBuf },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RcError {
    /// Stable, machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidScope { .. } => "invalid_scope",
            Self::InvalidScriptName { .. } => "invalid_script_name",
            Self::HomeDirUnavailable => "home_dir_unavailable",
            Self::ConfigParse { .. } => "config_parse",
            Self::MalformedKey { .. } => "malformed_key",
            Self::KeyCollision { .. } => "key_collision",
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::FileExists { .. } => "file_exists",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Yaml(_) => "yaml",
        }
    }

    #[must_use]
    pub fn config_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `RcError`.
pub type Result<T> = std::result::Result<T, RcError>;
