//! The color being mixed: three channels plus the foreground/background switch.

use crate::color::{Rgb, clamp};
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the three components of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Red, Self::Green, Self::Blue]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = Error;

    /// Case-sensitive: `Red` is rejected just like `alpha`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            _ => Err(Error::InvalidChannel(s.to_string())),
        }
    }
}

/// The arithmetic behind the `-`, `+` and `=` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Subtract,
    Add,
    Set,
}

impl Adjustment {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Subtract => "-",
            Self::Add => "+",
            Self::Set => "=",
        }
    }

    /// Result is clamped into the byte range, so `+ red 300` pins at 255.
    #[must_use]
    pub fn apply(self, current: u8, amount: i64) -> u8 {
        let current = i64::from(current);
        clamp(match self {
            Self::Subtract => current.saturating_sub(amount),
            Self::Add => current.saturating_add(amount),
            Self::Set => amount,
        })
    }
}

/// Owned by the session and only touched by command handlers, one command at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorState {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Escapes target the cell background instead of the text.
    pub background: bool,
}

impl ColorState {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, background: bool) -> Self {
        Self {
            red,
            green,
            blue,
            background,
        }
    }

    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    pub const fn set_rgb(&mut self, rgb: Rgb) {
        self.red = rgb.r;
        self.green = rgb.g;
        self.blue = rgb.b;
    }

    #[must_use]
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn adjust(&mut self, op: Adjustment, channel: Channel, amount: i64) {
        let value = op.apply(self.channel(channel), amount);
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    /// Script form that `load` replays back into the same state.
    #[must_use]
    pub fn export(&self) -> String {
        let mut out = String::new();
        for channel in Channel::all() {
            out.push_str(&format!("= {channel} {}\n", self.channel(channel)));
        }
        out.push_str(&format!("bg {}\n\n", self.background));
        out
    }

    /// Human-readable block appended by `save`. Not meant to be loaded again.
    #[must_use]
    pub fn save_block(&self) -> String {
        const RULE: &str = "-----------------------";
        let rgb = self.rgb();
        format!(
            "{RULE}\nESCAPE: {}\nRGB: {}\nHEX: {}\n{RULE}\n\n",
            crate::color::escape_repr(&rgb.escape(self.background)),
            rgb.css(),
            rgb.to_hex()
        )
    }
}
