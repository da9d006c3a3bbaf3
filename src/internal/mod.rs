//! tintpick's diagnostic logger.
//!
//! Initialized once from config; calls made before `init` are dropped so library
//! users and tests never see stray output. Diagnostics go to stderr and are
//! separate from the `ERROR:` lines the dispatcher prints for failed commands.

use crate::color::colorize;
use crate::config::Config;
use crate::level::Level;
use std::io::{self, Write};
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Diagnostics> = OnceLock::new();

const SCOPE_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    min_level: Level,
    colors: bool,
}

impl Diagnostics {
    #[must_use]
    pub const fn new(min_level: Level, colors: bool) -> Self {
        Self { min_level, colors }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.parse_level(), config.terminal.colors)
    }

    /// `None` when the level is filtered out.
    #[must_use]
    pub fn format(&self, level: Level, scope: &str, msg: &str) -> Option<String> {
        if level < self.min_level {
            return None;
        }
        let tag = format!("[{:<5}]", level.as_str());
        let tag = if self.colors {
            colorize(&tag, level.color())
        } else {
            tag
        };
        Some(format!("{tag} {scope:<width$}  {msg}", width = SCOPE_WIDTH))
    }

    fn write(&self, level: Level, scope: &str, msg: &str) {
        if let Some(line) = self.format(level, scope, msg) {
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
    }
}

/// Initialize the diagnostic logger from config.
///
/// Only the first call takes effect. An unknown `general.level` falls back to
/// `warn` and says so.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Diagnostics::from_config(config));
    if was_init {
        return;
    }
    match config.general.level.parse::<Level>() {
        Ok(level) => debug("INTERNAL", &format!("Log level: {level}")),
        Err(e) => warn("CONFIG", &format!("{e}, using warn")),
    }
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.write(level, scope, msg);
    }
}

/// Per-line dispatch detail. Visible only at level `trace`.
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Startup, config and replay activity. Visible at `debug` and below.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Files written and windows opened. Visible at `info` and below.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recoverable problems. Shown by default.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Failures that end the shell. Always shown once initialized.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
