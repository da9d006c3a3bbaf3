//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum diagnostic level.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Color the level tags of diagnostic lines.
    pub colors: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// Interactive shell configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt text.
    pub prompt: String,
    /// Persist input history between sessions.
    pub history: bool,
    /// Paint the prompt in the color being mixed.
    pub tint_prompt: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: ":: ".to_string(),
            history: true,
            tint_prompt: false,
        }
    }
}

/// Default targets for `save` and `export`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub save: String,
    pub export: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            save: "colour.clr".to_string(),
            export: "colour.cp".to_string(),
        }
    }
}

/// Swatch window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Geometry used when `gui` is given `-`.
    pub geometry: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            geometry: "240x160".to_string(),
        }
    }
}
