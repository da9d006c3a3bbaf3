//! `tintpick` - mix an RGB color from the terminal.
//!
//! Channels are nudged with `+`, `-` and `=` commands, previewed as 24-bit ANSI
//! escapes or in a swatch window, and written out as a readable log (`save`) or
//! a replayable script (`export`, `load`).
//!
//! # Example
//!
//! ```
//! use tintpick::{Config, Session};
//!
//! let mut session = Session::with_writers(Config::default(), Vec::<u8>::new(), Vec::<u8>::new());
//! for line in ["+ red 10", "+ green 5", "= blue 255", "bg true"] {
//!     session.dispatch_line(line).unwrap();
//! }
//!
//! assert_eq!(session.state().rgb().to_hex(), "#0a05ff");
//! assert_eq!(session.state().rgb().escape(true), "\x1b[48;2;10;5;255m");
//! ```
//!
//! # Features
//!
//! - `cli` (default): command-line binary and interactive shell
//! - `gui` (default): swatch windows for the `gui` command

pub mod color;
pub mod command;
pub mod config;
mod error;
pub mod internal;
pub mod level;
pub mod session;
pub mod state;
pub mod swatch;

// Shell module (feature-gated)
#[cfg(feature = "cli")]
pub mod shell;

pub use color::{Rgb, color_escape, hex_to_rgb, rgb_to_hex};
pub use command::{Command, CommandLine, Geometry};
pub use config::Config;
pub use error::Error;
pub use level::Level;
pub use session::{Flow, Session};
pub use state::{Adjustment, Channel, ColorState};
