//! Swatch windows for the `gui` command.
//!
//! Windowing event loops want the main thread of their process, and the REPL
//! already owns ours, so each window lives in a child `tintpick swatch`
//! process. The color travels in the child's arguments. The child prints
//! [`READY`] on stdout once its window exists, so a window host that dies
//! before that is reported to the caller instead of vanishing. After that a
//! named thread waits on the child.

#[cfg(feature = "gui")]
mod window;

#[cfg(feature = "gui")]
pub use window::show;

use crate::color::Rgb;
use crate::command::Geometry;
use crate::error::Error;
use crate::internal;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

/// Line a `swatch` child writes to stdout when its window is up.
pub const READY: &str = "tintpick-swatch-ready";

/// Everything a window needs, copied out of the session at launch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchRequest {
    pub color: Rgb,
    pub title: String,
    pub geometry: Geometry,
}

impl SwatchRequest {
    #[must_use]
    pub fn new(color: Rgb, background: bool, geometry: Geometry) -> Self {
        Self {
            color,
            title: color.describe(background),
            geometry,
        }
    }

    /// Arguments for the hidden `swatch` subcommand.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "swatch".to_string(),
            "--hex".to_string(),
            self.color.to_hex(),
            "--title".to_string(),
            self.title.clone(),
            "--geometry".to_string(),
            self.geometry.to_string(),
        ]
    }
}

/// Starts a window and hands back the thread that waits for it to close.
pub trait Launcher {
    /// # Errors
    /// [`Error::Gui`] when the window host can't be started.
    fn launch(&self, request: &SwatchRequest) -> Result<JoinHandle<()>, Error>;
}

/// Re-executes a tintpick binary with the `swatch` subcommand.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: PathBuf,
}

impl ProcessLauncher {
    #[must_use]
    pub const fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Launches windows through the running executable.
    ///
    /// # Errors
    /// [`Error::Gui`] if the executable path can't be resolved.
    pub fn current() -> Result<Self, Error> {
        std::env::current_exe()
            .map(Self::new)
            .map_err(|e| Error::Gui(format!("cannot locate executable: {e}")))
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, request: &SwatchRequest) -> Result<JoinHandle<()>, Error> {
        internal::info(
            "GUI",
            &format!("Opening {} window for {}", request.geometry, request.color),
        );
        let mut child = Command::new(&self.program)
            .args(request.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Gui(format!("cannot start window: {e}")))?;

        let mut stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or_else(|| Error::Gui("window host has no stdout".to_string()))?;
        let mut line = String::new();
        let ready = stdout.read_line(&mut line).is_ok() && line.trim_end() == READY;
        if !ready {
            let _ = child.kill();
            let status = child
                .wait()
                .map_err(|e| Error::Gui(format!("lost window host: {e}")))?;
            return Err(Error::Gui(format!("window host failed ({status})")));
        }
        internal::trace("GUI", "Swatch window ready");

        thread::Builder::new()
            .name(format!("swatch-{}", request.color))
            .spawn(move || {
                // keep the pipe open until the child is gone
                let _stdout = stdout;
                match child.wait() {
                    Ok(status) if !status.success() => {
                        internal::warn("GUI", &format!("Swatch window exited with {status}"));
                    }
                    Ok(_) => internal::trace("GUI", "Swatch window closed"),
                    Err(e) => internal::warn("GUI", &format!("Lost swatch window: {e}")),
                }
            })
            .map_err(|e| Error::Gui(format!("cannot spawn window thread: {e}")))
    }
}
