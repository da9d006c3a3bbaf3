#![no_main]
use libfuzzer_sys::fuzz_target;
use tintpick::Rgb;

fuzz_target!(|data: &str| {
    // Must not panic on any hex string, and anything accepted must re-encode
    if let Ok(color) = Rgb::from_hex(data) {
        let hex = color.to_hex();
        assert_eq!(Rgb::from_hex(&hex).unwrap(), color);
    }
});
