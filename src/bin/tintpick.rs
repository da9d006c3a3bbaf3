//! Bare invocation drops into the mixer prompt; a file argument replays it as a
//! script and exits.
//!
//! Usage:
//!   tintpick                  Enter interactive shell
//!   tintpick <file>           Run the commands in <file>
//!   tintpick --config <path>  Use another config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tintpick::config::Config;
use tintpick::session::{Flow, Session};
use tintpick::{Error, internal};

/// tintpick - mix an RGB color from the terminal.
#[derive(Parser)]
#[command(
    name = "tintpick",
    version,
    about = "Mix an RGB color from the terminal",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Script to run instead of the interactive prompt
    file: Option<PathBuf>,

    /// Config file (defaults to ~/.config/tintpick/tintpick.conf)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Internal>,
}

/// Not for direct use: the `gui` command re-executes tintpick with these.
#[derive(Subcommand)]
enum Internal {
    #[command(hide = true)]
    Swatch {
        #[arg(long)]
        hex: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        geometry: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map_or_else(Config::load, Config::load_from) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    if let Some(Internal::Swatch {
        hex,
        title,
        geometry,
    }) = cli.command
    {
        return match swatch(&hex, title, &geometry) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("ERROR: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut session = Session::stdio(config);

    let code = match cli.file {
        Some(path) => match session.run_script(&path) {
            Ok(Flow::Continue) => 0,
            Ok(Flow::Exit(code)) => code,
            Err(e) => {
                session.report(&e);
                1
            }
        },
        None => match tintpick::shell::run(&mut session) {
            Ok(code) => code,
            Err(e) => {
                internal::error("SHELL", &format!("Shell error: {e}"));
                1
            }
        },
    };

    session.finish();
    exit_code(code)
}

#[cfg(feature = "gui")]
fn swatch(hex: &str, title: String, geometry: &str) -> Result<(), Error> {
    let request = tintpick::swatch::SwatchRequest {
        color: tintpick::Rgb::from_hex(hex)?,
        title,
        geometry: geometry.parse()?,
    };
    tintpick::swatch::show(&request)
}

#[cfg(not(feature = "gui"))]
fn swatch(_hex: &str, _title: String, _geometry: &str) -> Result<(), Error> {
    Err(Error::Gui("built without the `gui` feature".to_string()))
}

/// Process exit statuses are a byte, so `exit` codes outside 0..=255 (`exit 300`,
/// `exit -1`) become 1 rather than wrapping to an unrelated status.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
