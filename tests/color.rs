use tintpick::color::{RESET, clamp, colorize, escape_repr};
use tintpick::{Error, Rgb, color_escape, hex_to_rgb, rgb_to_hex};

#[test]
fn rgb_to_hex_pads_and_lowercases() {
    assert_eq!(rgb_to_hex(10, 5, 255), "#0a05ff");
    assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    assert_eq!(rgb_to_hex(171, 205, 239), "#abcdef");
}

#[test]
fn rgb_to_hex_clamps_out_of_range_values() {
    assert_eq!(rgb_to_hex(-20, 256, 1000), "#00ffff");
}

#[test]
fn hex_to_rgb_accepts_optional_hash() {
    assert_eq!(hex_to_rgb("#ff00aa").unwrap(), (255, 0, 170));
    assert_eq!(hex_to_rgb("01a2ff").unwrap(), (1, 162, 255));
    assert_eq!(hex_to_rgb("#FF00AA").unwrap(), (255, 0, 170));
}

#[test]
fn hex_to_rgb_splits_into_equal_thirds() {
    assert_eq!(hex_to_rgb("#fff").unwrap(), (15, 15, 15));
    assert_eq!(hex_to_rgb("#abc").unwrap(), (10, 11, 12));
    // wide segments saturate instead of overflowing a byte
    assert_eq!(hex_to_rgb("#0ff0000ff").unwrap(), (255, 0, 255));
    assert_eq!(hex_to_rgb("#00ff00ff00ff").unwrap(), (255, 255, 255));
}

#[test]
fn hex_to_rgb_rejects_bad_length() {
    for hex in ["#ffff", "ff", "#", "", "#fffff"] {
        assert!(
            matches!(hex_to_rgb(hex), Err(Error::InvalidHex(_))),
            "{hex} should be rejected"
        );
    }
}

#[test]
fn hex_to_rgb_rejects_non_hex_characters() {
    assert!(matches!(hex_to_rgb("#zz00aa"), Err(Error::InvalidHex(_))));
    assert!(matches!(hex_to_rgb("#-10000"), Err(Error::InvalidHex(_))));
    assert!(matches!(hex_to_rgb("##ff00aa"), Err(Error::InvalidHex(_))));
}

#[test]
fn hex_round_trips() {
    for hex in ["#000000", "#ffffff", "#0a05ff", "#123abc", "#ff00ff"] {
        assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
    }
    for (r, g, b) in [(0, 0, 0), (255, 255, 255), (1, 128, 254), (16, 15, 17)] {
        let hex = rgb_to_hex(i64::from(r), i64::from(g), i64::from(b));
        assert_eq!(hex_to_rgb(&hex).unwrap(), (r, g, b));
    }
}

#[test]
fn escape_selects_foreground_or_background() {
    let color = Rgb::new(10, 20, 30);
    assert_eq!(color_escape(color, false), "\x1b[38;2;10;20;30m");
    assert_eq!(color_escape(color, true), "\x1b[48;2;10;20;30m");
    assert!(color.escape(false).starts_with("\x1b[38;2;"));
    assert!(color.escape(true).starts_with("\x1b[48;2;"));
    assert!(!color.escape(true).ends_with(RESET));
}

#[test]
fn escape_repr_spells_out_escape_byte() {
    let repr = escape_repr("\x1b[48;2;10;5;255m");
    assert_eq!(repr, r"'\x1b[48;2;10;5;255m'");
}

#[test]
fn describe_combines_all_representations() {
    let title = Rgb::new(255, 0, 255).describe(false);
    assert_eq!(title, r"'\x1b[38;2;255;0;255m' rgb(255, 0, 255) #ff00ff");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", Rgb::new(1, 2, 3)), "\x1b[38;2;1;2;3mhi\x1b[0m");
}

#[test]
fn clamp_pins_to_byte_range() {
    assert_eq!(clamp(-1), 0);
    assert_eq!(clamp(128), 128);
    assert_eq!(clamp(i64::MAX), 255);
}
