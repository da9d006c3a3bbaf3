//! TOML configuration loading.
//!
//! Separated from the struct definitions so the file lookup stays independent of
//! the serde schema.

mod structs;

pub use structs::{FilesConfig, GeneralConfig, GuiConfig, ShellConfig, TerminalConfig};

use crate::command::Geometry;
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty or missing file must still produce a working session, so every
/// section defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub shell: ShellConfig,
    pub files: FilesConfig,
    pub gui: GuiConfig,
}

impl Config {
    /// Loads the user's config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::debug(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// `~/.config/tintpick/tintpick.conf` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tintpick").join("tintpick.conf"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown level strings fall back to `warn`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Warn)
    }

    /// A bad configured geometry falls back to the built-in default size.
    #[must_use]
    pub fn default_geometry(&self) -> Geometry {
        self.gui.geometry.parse().unwrap_or_else(|_| {
            internal::warn(
                "CONFIG",
                &format!("Invalid gui.geometry '{}', using 240x160", self.gui.geometry),
            );
            Geometry::new(240, 160)
        })
    }
}
