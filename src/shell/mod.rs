//! tintpick interactive shell.

use crate::color::colorize;
use crate::config::Config;
use crate::internal;
use crate::session::{Flow, Session};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::path::PathBuf;

/// Runs the interactive shell until `exit`, end of input, or Ctrl-C.
///
/// Returns the exit code the session ended with.
///
/// # Errors
/// Returns an error message if the line editor can't be initialized or a
/// command fails fatally.
pub fn run(session: &mut Session) -> Result<i32, String> {
    internal::debug("SHELL", "Initializing readline...");
    let mut rl: Editor<(), DefaultHistory> =
        DefaultEditor::new().map_err(|e| format!("Error creating editor: {e}"))?;

    let history_path = session
        .config()
        .shell
        .history
        .then(get_history_path)
        .flatten();
    if let Some(path) = &history_path
        && rl.load_history(path).is_ok()
    {
        internal::debug("SHELL", "History loaded");
    }

    internal::debug("SHELL", "Shell ready");

    let mut code = 0;
    loop {
        let prompt = build_prompt(session);
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match session.dispatch_line(line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit(c)) => {
                        code = c;
                        break;
                    }
                    Err(e) => {
                        session.report(&e);
                        code = 1;
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                internal::error("SHELL", &format!("Readline error: {e}"));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if rl.save_history(path).is_err() {
            internal::warn("SHELL", "Could not save history");
        }
    }

    internal::debug("SHELL", "Shell exited");
    Ok(code)
}

/// The configured prompt, painted in the current color when `shell.tint_prompt` is set.
#[must_use]
pub fn build_prompt<O: std::io::Write, E: std::io::Write>(session: &Session<O, E>) -> String {
    prompt_for(session.config(), session.state().rgb())
}

fn prompt_for(config: &Config, color: crate::color::Rgb) -> String {
    if config.shell.tint_prompt {
        colorize(&config.shell.prompt, color)
    } else {
        config.shell.prompt.clone()
    }
}

fn get_history_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "tintpick")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}
