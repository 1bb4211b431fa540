//! Decorated argument keys (`--name`, `<name>`).

use std::fmt;
use std::str::FromStr;

use crate::error::RcError;

/// An argument key whose simple name can be derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Option or flag, written `--name`.
    Flag(String),
    /// Positional argument, written `<name>`.
    Positional(String),
}

impl Key {
    /// Parse a decorated key, returning `None` for undecorated keys
    /// (docopt commands, short options) and for empty names.
    #[must_use]
    pub fn parse(decorated: &str) -> Option<Self> {
        if let Some(name) = decorated.strip_prefix("--") {
            return (!name.is_empty()).then(|| Self::Flag(name.to_string()));
        }
        decorated
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .filter(|name| !name.is_empty())
            .map(|name| Self::Positional(name.to_string()))
    }

    /// The undecorated name used in defaults and config files.
    #[must_use]
    pub fn simple(&self) -> &str {
        match self {
            Self::Flag(name) | Self::Positional(name) => name,
        }
    }

    #[must_use]
    pub fn into_simple(self) -> String {
        match self {
            Self::Flag(name) | Self::Positional(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(name) => write!(f, "--{name}"),
            Self::Positional(name) => write!(f, "<{name}>"),
        }
    }
}

impl FromStr for Key {
    type Err = RcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RcError::MalformedKey { key: s.to_string() })
    }
}
