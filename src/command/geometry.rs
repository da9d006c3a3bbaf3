//! `WxH[+X+Y]` window geometry strings.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub position: Option<(i32, i32)>,
}

impl Geometry {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            position: None,
        }
    }

    #[must_use]
    pub const fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if let Some((x, y)) = self.position {
            write!(f, "{x:+}{y:+}")?;
        }
        Ok(())
    }
}

impl FromStr for Geometry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidGeometry(s.to_string());

        // Offsets start at the first sign after the size
        let (size, offsets) = s
            .find(['+', '-'])
            .map_or((s, ""), |idx| (&s[..idx], &s[idx..]));

        let (w, h) = size.split_once('x').ok_or_else(invalid)?;
        let width: u32 = w.parse().map_err(|_| invalid())?;
        let height: u32 = h.parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        let mut geometry = Self::new(width, height);
        if !offsets.is_empty() {
            let split = offsets[1..].find(['+', '-']).ok_or_else(invalid)? + 1;
            let x: i32 = offsets[..split].parse().map_err(|_| invalid())?;
            let y: i32 = offsets[split..].parse().map_err(|_| invalid())?;
            geometry = geometry.at(x, y);
        }
        Ok(geometry)
    }
}
