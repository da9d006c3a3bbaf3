//! Turns a line of input into a validated [`Command`].
//!
//! Arity and argument types are checked here, so a handler only ever runs with
//! arguments it can use. Extra trailing arguments are ignored.

mod geometry;
pub mod registry;

pub use geometry::Geometry;
pub use registry::{COMMANDS, CommandInfo, help_text, lookup};

use crate::error::Error;
use crate::state::{Adjustment, Channel};

/// A raw line split on whitespace. No quoting or escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// `None` for blank lines.
    #[must_use]
    pub fn split(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace().map(ToString::to_string);
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    fn arg(&self, idx: usize) -> Option<&str> {
        self.args.get(idx).map(String::as_str)
    }
}

/// Where the `gui` window takes its size from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSize {
    /// `-` on the command line: use the configured default.
    Default,
    Explicit(Geometry),
}

/// One command with its arguments already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Out {
        hex: Option<String>,
    },
    Background {
        enabled: bool,
    },
    Adjust {
        op: Adjustment,
        channel: Channel,
        amount: i64,
    },
    Gui {
        daemon: bool,
        size: WindowSize,
        hex: Option<String>,
    },
    Save {
        path: Option<String>,
    },
    Export {
        path: Option<String>,
    },
    LoadHex {
        hex: String,
    },
    Load {
        path: String,
    },
    Exit {
        code: i32,
    },
    Clear,
    Help,
}

impl Command {
    /// Parses one line. `Ok(None)` for blank input.
    ///
    /// # Errors
    /// Unknown names, missing arguments, bad channels, non-integer amounts and
    /// malformed geometry.
    pub fn parse(line: &str) -> Result<Option<Self>, Error> {
        CommandLine::split(line).map(|cl| Self::from_line(&cl)).transpose()
    }

    /// # Errors
    /// See [`Command::parse`].
    pub fn from_line(cl: &CommandLine) -> Result<Self, Error> {
        let info = lookup(&cl.name).ok_or_else(|| Error::CommandNotFound(cl.name.clone()))?;
        let required = |idx: usize| cl.arg(idx).ok_or(Error::Usage(info.usage));
        let optional = |idx: usize| cl.arg(idx).map(ToString::to_string);

        let command = match info.name {
            "out" => Self::Out { hex: optional(0) },
            "bg" => Self::Background {
                enabled: required(0)? == "true",
            },
            "-" | "+" | "=" => {
                let op = match info.name {
                    "-" => Adjustment::Subtract,
                    "+" => Adjustment::Add,
                    _ => Adjustment::Set,
                };
                let channel: Channel = required(0)?.parse()?;
                let amount = parse_int(required(1)?)?;
                Self::Adjust {
                    op,
                    channel,
                    amount,
                }
            }
            "gui" => {
                let daemon = required(0)? == "daemon";
                let size = match required(1)? {
                    "-" => WindowSize::Default,
                    g => WindowSize::Explicit(g.parse::<Geometry>()?),
                };
                Self::Gui {
                    daemon,
                    size,
                    hex: optional(2),
                }
            }
            "save" => Self::Save { path: optional(0) },
            "export" => Self::Export { path: optional(0) },
            "loadhex" => Self::LoadHex {
                hex: required(0)?.to_string(),
            },
            "load" => Self::Load {
                path: required(0)?.to_string(),
            },
            "exit" => Self::Exit {
                code: cl.arg(0).map_or(Ok(0), parse_int).and_then(|c| {
                    i32::try_from(c).map_err(|_| Error::Parse(c.to_string()))
                })?,
            },
            "clear" => Self::Clear,
            "help" => Self::Help,
            other => return Err(Error::CommandNotFound(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_int(s: &str) -> Result<i64, Error> {
    s.parse().map_err(|_| Error::Parse(s.to_string()))
}
