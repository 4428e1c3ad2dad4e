#![no_main]

//! Fuzz target for fixture parsing and the swap rules.
//!
//! Arbitrary text must never panic, rendering must round-trip, and a
//! successful normalize must leave line 0 >= line 1.

use datafix_swap::Fixture;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let fixture = Fixture::parse(s);
    assert_eq!(fixture.render(), s);

    let mut swapped = fixture.clone();
    if swapped.swap_width_height().is_ok() {
        swapped.swap_width_height().unwrap();
        assert_eq!(swapped, fixture);
    }

    let mut normalized = fixture.clone();
    if normalized.normalize().is_ok() {
        let l0 = normalized.dimension(0).unwrap();
        let l1 = normalized.dimension(1).unwrap();
        assert!(l0 >= l1);
        assert_eq!(normalized.len(), fixture.len());
    }
});
