#![no_main]

//! Fuzz target for tolerant dimension parsing.

use datafix_swap::parse_dimension;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Whatever parses must parse identically once re-rendered.
    if let Ok(n) = parse_dimension(s) {
        assert_eq!(parse_dimension(&n.to_string()), Ok(n));
        assert_eq!(parse_dimension(&format!("\u{feff}{n}")), Ok(n));
    }
});
