//! Severity levels for tintpick's own diagnostics.

use crate::color::Rgb;
use std::fmt;
use std::str::FromStr;

/// Ordered so a message can be compared against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Per-line parsing and dispatch details.
    Trace = 0,
    /// Startup, teardown, file and window activity.
    Debug = 1,
    Info = 2,
    /// Recoverable problems such as an unwritable history file.
    #[default]
    Warn = 3,
    Error = 4,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Tag color on terminals that render 24-bit escapes.
    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            Self::Trace | Self::Debug => Rgb::purple(),
            Self::Info => Rgb::cyan(),
            Self::Warn => Rgb::yellow(),
            Self::Error => Rgb::red(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names the rejected `general.level` value in the startup warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
