//! Command execution against the color being mixed.
//!
//! A [`Session`] owns the color state, the output sinks and any swatch windows it
//! opened. [`Session::dispatch_line`] is the isolation boundary: a failing line is
//! reported as `ERROR: ...` on the error sink and the session carries on.

use crate::color::{RESET, Rgb, escape_repr};
use crate::command::{Command, WindowSize, help_text};
use crate::config::Config;
use crate::error::Error;
use crate::internal;
use crate::state::ColorState;
use crate::swatch::{Launcher, ProcessLauncher, SwatchRequest};
use std::fs::{self, OpenOptions};
use std::io::{self, Stderr, Stdout, Write};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

/// Printed after the escape in `out` so the color is visible, not just described.
const SAMPLE: &str = "   tintpick   ";

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

pub struct Session<O: Write = Stdout, E: Write = Stderr> {
    state: ColorState,
    config: Config,
    out: O,
    err: E,
    launcher: Option<Box<dyn Launcher>>,
    /// Non-daemon windows; joined when the session finishes.
    windows: Vec<JoinHandle<()>>,
    /// Scripts currently being replayed, innermost last.
    loading: Vec<PathBuf>,
}

impl Session {
    /// Session on the process's stdout/stderr, opening windows through this executable.
    #[must_use]
    pub fn stdio(config: Config) -> Self {
        let session = Self::with_writers(config, io::stdout(), io::stderr());
        match ProcessLauncher::current() {
            Ok(launcher) => session.launcher(launcher),
            Err(e) => {
                internal::warn("GUI", &format!("{e}"));
                session
            }
        }
    }
}

impl<O: Write, E: Write> Session<O, E> {
    #[must_use]
    pub fn with_writers(config: Config, out: O, err: E) -> Self {
        Self {
            state: ColorState::default(),
            config,
            out,
            err,
            launcher: None,
            windows: Vec::new(),
            loading: Vec::new(),
        }
    }

    #[must_use]
    pub fn launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Some(Box::new(launcher));
        self
    }

    #[must_use]
    pub const fn state(&self) -> &ColorState {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut ColorState {
        &mut self.state
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn output(&self) -> &O {
        &self.out
    }

    #[must_use]
    pub const fn errors(&self) -> &E {
        &self.err
    }

    /// Parses and runs one line, reporting non-fatal failures on the error sink.
    ///
    /// # Errors
    /// Only fatal errors (a swatch window that can't be launched) are returned.
    pub fn dispatch_line(&mut self, line: &str) -> Result<Flow, Error> {
        internal::trace("SESSION", &format!("Dispatching: {line}"));
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        });

        match result {
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                self.report(&e);
                Ok(Flow::Continue)
            }
            ok => ok,
        }
    }

    /// Runs one command.
    ///
    /// # Errors
    /// Whatever the handler fails with; the caller decides whether to continue.
    pub fn execute(&mut self, command: Command) -> Result<Flow, Error> {
        match command {
            Command::Out { hex } => self.cmd_out(hex.as_deref())?,
            Command::Background { enabled } => self.state.background = enabled,
            Command::Adjust {
                op,
                channel,
                amount,
            } => {
                self.state.adjust(op, channel, amount);
                internal::debug(
                    "STATE",
                    &format!(
                        "{} {channel} {amount} -> {}",
                        op.symbol(),
                        self.state.channel(channel)
                    ),
                );
            }
            Command::Gui { daemon, size, hex } => self.cmd_gui(daemon, size, hex.as_deref())?,
            Command::Save { path } => self.cmd_save(path.as_deref())?,
            Command::Export { path } => self.cmd_export(path.as_deref())?,
            Command::LoadHex { hex } => self.state.set_rgb(Rgb::from_hex(&hex)?),
            Command::Load { path } => return self.run_script(&expand_path(&path)),
            Command::Exit { code } => return Ok(Flow::Exit(code)),
            Command::Clear => clear_terminal()?,
            Command::Help => write!(self.out, "{}", help_text())?,
        }
        Ok(Flow::Continue)
    }

    /// Replays every line of a script through [`Session::dispatch_line`].
    ///
    /// An `exit` inside the script stops the replay and is passed up.
    ///
    /// # Errors
    /// [`Error::FileNotFound`], [`Error::CyclicLoad`], read failures, and fatal
    /// errors from individual lines.
    pub fn run_script(&mut self, path: &Path) -> Result<Flow, Error> {
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if self.loading.contains(&canonical) {
            return Err(Error::CyclicLoad(canonical));
        }

        let content = fs::read_to_string(path)?;
        internal::debug("LOAD", &format!("Replaying {}", path.display()));
        self.loading.push(canonical);

        let mut flow = Ok(Flow::Continue);
        for line in content.lines() {
            flow = self.dispatch_line(line);
            if !matches!(flow, Ok(Flow::Continue)) {
                break;
            }
        }

        self.loading.pop();
        flow
    }

    /// Waits for every non-daemon window to close.
    pub fn finish(&mut self) {
        if !self.windows.is_empty() {
            internal::debug(
                "GUI",
                &format!("Waiting for {} open window(s)", self.windows.len()),
            );
        }
        for handle in self.windows.drain(..) {
            if handle.join().is_err() {
                internal::warn("GUI", "Swatch thread panicked");
            }
        }
    }

    /// Writes `ERROR: <message>` to the error sink.
    pub fn report(&mut self, error: &Error) {
        internal::debug("SESSION", &format!("{error:?}"));
        let _ = writeln!(self.err, "ERROR: {error}");
    }

    fn cmd_out(&mut self, hex: Option<&str>) -> Result<(), Error> {
        let rgb = match hex {
            Some(hex) => Rgb::from_hex(hex)?,
            None => self.state.rgb(),
        };
        let escape = rgb.escape(self.state.background);
        writeln!(self.out, "ESCAPE: {}", escape_repr(&escape))?;
        writeln!(self.out, "RGB: {}", rgb.css())?;
        writeln!(self.out, "HEX: {}", rgb.to_hex())?;
        writeln!(self.out, "{escape}{SAMPLE}{RESET}")?;
        Ok(())
    }

    fn cmd_gui(&mut self, daemon: bool, size: WindowSize, hex: Option<&str>) -> Result<(), Error> {
        let color = match hex {
            Some(hex) => Rgb::from_hex(hex)?,
            None => self.state.rgb(),
        };
        let geometry = match size {
            WindowSize::Default => self.config.default_geometry(),
            WindowSize::Explicit(geometry) => geometry,
        };
        let launcher = self
            .launcher
            .as_ref()
            .ok_or_else(|| Error::Gui("no window launcher available".to_string()))?;

        let request = SwatchRequest::new(color, self.state.background, geometry);
        let handle = launcher.launch(&request)?;
        if !daemon {
            self.windows.push(handle);
        }
        Ok(())
    }

    fn cmd_save(&self, path: Option<&str>) -> Result<(), Error> {
        let path = expand_path(path.unwrap_or(&self.config.files.save));
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(self.state.save_block().as_bytes())?;
        internal::info("SAVE", &format!("Appended to {}", path.display()));
        Ok(())
    }

    fn cmd_export(&self, path: Option<&str>) -> Result<(), Error> {
        let path = expand_path(path.unwrap_or(&self.config.files.export));
        fs::write(&path, self.state.export())?;
        internal::info("EXPORT", &format!("Wrote {}", path.display()));
        Ok(())
    }
}

/// `~` and `~/...` resolve against the user's home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn clear_terminal() -> Result<(), Error> {
    let status = if cfg!(windows) {
        std::process::Command::new("cmd").args(["/C", "cls"]).status()?
    } else {
        std::process::Command::new("clear").status()?
    };
    if !status.success() {
        internal::warn("CLEAR", &format!("clear exited with {status}"));
    }
    Ok(())
}
