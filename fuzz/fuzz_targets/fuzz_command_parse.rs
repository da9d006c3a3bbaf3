#![no_main]
use libfuzzer_sys::fuzz_target;
use tintpick::{Command, Geometry};

fuzz_target!(|data: &str| {
    // Must not panic on any line, including unbalanced geometry offsets
    let _ = Command::parse(data);
    let _ = data.parse::<Geometry>();
});
