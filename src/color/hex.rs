//! Hex string conversion.

use crate::Error;

/// Formats three channel values as `#rrggbb`.
///
/// Values outside the byte range are clamped first so the output always has
/// exactly two digits per channel.
#[must_use]
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> String {
    format!("#{:02x}{:02x}{:02x}", clamp(r), clamp(g), clamp(b))
}

/// Splits the digits after an optional `#` into three equal segments and reads
/// each as base 16.
///
/// `#fff` is (15, 15, 15), not CSS shorthand. Segments wider than a byte
/// saturate at 255.
///
/// # Errors
/// [`Error::InvalidHex`] when the digit count is zero or not divisible by
/// three, or a character is not an ASCII hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), Error> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() || digits.len() % 3 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(Error::InvalidHex(hex.to_string()));
    }

    let width = digits.len() / 3;
    let channel = |i: usize| parse_segment(&digits[i * width..(i + 1) * width]);
    Ok((channel(0), channel(1), channel(2)))
}

fn parse_segment(segment: &str) -> u8 {
    let value = segment
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc.saturating_mul(16).saturating_add(d));
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Pins an arbitrary integer into `0..=255`.
#[must_use]
pub fn clamp(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}
