//! Unified error type for every tintpick operation.
//!
//! Handlers never panic on bad input. Each failure becomes a variant here so the
//! dispatcher can report it on one line and keep the session alive.

use std::path::PathBuf;

/// Error type for tintpick operations.
#[derive(Debug)]
pub enum Error {
    /// First token of a line names no registered command.
    CommandNotFound(String),
    /// Required arguments are missing; carries the command's usage line.
    Usage(&'static str),
    /// Channel name is not one of `red`, `green`, `blue`.
    InvalidChannel(String),
    /// An argument that must be an integer isn't one.
    Parse(String),
    /// Malformed hex color string.
    InvalidHex(String),
    /// Window geometry string is not `WxH[+X+Y]`.
    InvalidGeometry(String),
    /// Script file passed to `load` does not exist.
    FileNotFound(PathBuf),
    /// A script loads itself, directly or through other scripts.
    CyclicLoad(PathBuf),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// The swatch window could not be launched.
    Gui(String),
}

impl Error {
    /// Only a broken windowing setup ends the session.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Gui(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandNotFound(name) => write!(f, "command not found: {name}"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
            Self::InvalidChannel(name) => {
                write!(f, "invalid channel '{name}' (expected red, green or blue)")
            }
            Self::Parse(value) => write!(f, "not an integer: '{value}'"),
            Self::InvalidHex(hex) => write!(f, "invalid hex color: '{hex}'"),
            Self::InvalidGeometry(g) => write!(f, "invalid geometry '{g}' (expected WxH[+X+Y])"),
            Self::FileNotFound(p) => write!(f, "file not found: {}", p.display()),
            Self::CyclicLoad(p) => write!(f, "cyclic load: {}", p.display()),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Gui(msg) => write!(f, "gui error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
