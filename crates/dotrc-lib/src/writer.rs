//! Writing config files as JSON or YAML.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::{RcError, Result};

/// Output format for [`write_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Guess the format from a file extension (`json`, `yaml`, `yml`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for Format {
    type Err = RcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(RcError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialize `contents` to text.
///
/// JSON is indented with two spaces; YAML is block style with Unicode left
/// unescaped. Both end with a newline.
///
/// # Errors
///
/// Returns `Json` or `Yaml` if `contents` cannot be serialized.
pub fn render<T: Serialize + ?Sized>(contents: &T, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut text = serde_json::to_string_pretty(contents)?;
            text.push('\n');
            Ok(text)
        }
        Format::Yaml => Ok(serde_yaml::to_string(contents)?),
    }
}

/// Write `contents` to `out_path` in `format`.
///
/// The text is fully serialized before the filesystem is touched, then
/// written to a uniquely named temp file beside the target and renamed over
/// it. A symlinked `out_path` is written through to its target, and an
/// existing file keeps its permissions.
///
/// # Errors
///
/// Returns `FileExists` if `overwrite` is false and `out_path` exists,
/// a serialization error, or `Io` if writing fails. No temp file is left
/// behind on error.
pub fn write_config<T: Serialize + ?Sized>(
    contents: &T,
    out_path: &Path,
    format: Format,
    overwrite: bool,
) -> Result<()> {
    let text = render(contents, format)?;

    if !overwrite && out_path.exists() {
        return Err(RcError::FileExists {
            path: out_path.to_path_buf(),
        });
    }

    let target = fs::canonicalize(out_path).unwrap_or_else(|_| out_path.to_path_buf());
    let existing = fs::metadata(&target).ok();

    let mut tmp = temp_file_beside(&target)?;
    if let Some(meta) = &existing {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;

    // Dropping the error drops the temp file, which removes it.
    tmp.persist(&target).map_err(|e| RcError::Io(e.error))?;
    tracing::debug!(
        path = %out_path.display(),
        target = %target.display(),
        %format,
        bytes = text.len(),
        "Wrote config"
    );
    Ok(())
}

/// [`write_config`] with the format given by name.
///
/// # Errors
///
/// Returns `UnsupportedFormat` before any write if `format` is unknown,
/// otherwise anything [`write_config`] returns.
pub fn write_config_as<T: Serialize + ?Sized>(
    contents: &T,
    out_path: &Path,
    format: &str,
    overwrite: bool,
) -> Result<()> {
    let format: Format = format.parse()?;
    write_config(contents, out_path, format, overwrite)
}

fn temp_file_beside(target: &Path) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut builder = tempfile::Builder::new();
    builder.prefix(&name).suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // New files get the usual 0o666 minus umask, not tempfile's 0o600.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    Ok(builder.tempfile_in(dir)?)
}
