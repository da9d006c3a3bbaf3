//! Color codec: RGB triples, `#rrggbb` strings and 24-bit ANSI escapes.
//!
//! Pure functions only. The session, the swatch window and the diagnostic logger
//! share this one implementation.

mod hex;

pub use hex::{clamp, hex_to_rgb, rgb_to_hex};

use std::fmt;

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// A dedicated type keeps channel values in byte range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (or any `#` + 3n hex digits) into a triple.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidHex`] when the digit count is not a
    /// non-zero multiple of three or a non-hex character appears.
    pub fn from_hex(hex: &str) -> Result<Self, crate::Error> {
        let (r, g, b) = hex_to_rgb(hex)?;
        Ok(Self::new(r, g, b))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// SGR 38 colors the text itself, SGR 48 the cell behind it.
    #[must_use]
    pub fn escape(self, background: bool) -> String {
        color_escape(self, background)
    }

    /// One-line summary used for window titles: escape repr, `rgb(...)` and hex.
    #[must_use]
    pub fn describe(self, background: bool) -> String {
        format!(
            "{} {} {}",
            escape_repr(&self.escape(background)),
            self.css(),
            self.to_hex()
        )
    }

    /// `rgb(r, g, b)` as CSS writes it.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Diagnostic tag color for errors.
    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    /// Diagnostic tag color for warnings.
    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    /// Diagnostic tag color for info.
    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    /// Diagnostic tag color for trace and debug.
    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Builds `ESC[38;2;r;g;bm` or `ESC[48;2;r;g;bm`. No reset is appended.
#[must_use]
pub fn color_escape(rgb: Rgb, background: bool) -> String {
    let code = if background { 48 } else { 38 };
    format!("\x1b[{code};2;{};{};{}m", rgb.r, rgb.g, rgb.b)
}

/// Raw escapes would recolor the terminal instead of showing up, so print them
/// quoted with ESC spelled `\x1b`, the way a debugger shows the string.
#[must_use]
pub fn escape_repr(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\x1b' => out.push_str("\\x1b"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Wraps `text` in a foreground escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Rgb) -> String {
    format!("{}{text}{RESET}", color.escape(false))
}
