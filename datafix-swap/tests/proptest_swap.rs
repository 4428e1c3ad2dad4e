//! Property-based tests for the swap rules.
//!
//! These tests verify key invariants:
//! - Width/height swap exchanges exactly lines 1 and 2
//! - Width/height swap is an involution
//! - Length/width swap swaps iff line 0 < line 1, and is idempotent
//! - Lines past index 2 are never touched

use datafix_swap::{Fixture, parse_dimension};
use proptest::prelude::*;

/// Strategy for a fixture: three dimension lines plus optional trailing notes.
fn arb_fixture_text() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(-100_000i64..100_000, 3),
        prop::collection::vec(
            prop::string::string_regex(r"[a-z ]{0,12}").unwrap(),
            0..3,
        ),
        prop::bool::ANY,
        prop::bool::ANY,
    )
        .prop_map(|(dims, extra, crlf, trailing_newline)| {
            let nl = if crlf { "\r\n" } else { "\n" };
            let mut lines: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            lines.extend(extra);
            let mut text = lines.join(nl);
            if trailing_newline {
                text.push_str(nl);
            }
            text
        })
}

fn content(f: &Fixture, i: usize) -> String {
    f.lines()[i].content.clone()
}

proptest! {
    #[test]
    fn width_height_swap_exchanges_lines_1_and_2(text in arb_fixture_text()) {
        let original = Fixture::parse(&text);
        let mut f = original.clone();
        f.swap_width_height().unwrap();

        prop_assert_eq!(content(&f, 0), content(&original, 0));
        prop_assert_eq!(content(&f, 1), content(&original, 2));
        prop_assert_eq!(content(&f, 2), content(&original, 1));
        prop_assert_eq!(&f.lines()[3..], &original.lines()[3..]);
    }

    #[test]
    fn width_height_swap_twice_restores(text in arb_fixture_text()) {
        let mut f = Fixture::parse(&text);
        f.swap_width_height().unwrap();
        f.swap_width_height().unwrap();
        prop_assert_eq!(f.render(), text);
    }

    #[test]
    fn length_width_swap_iff_smaller(text in arb_fixture_text()) {
        let original = Fixture::parse(&text);
        let l0 = original.dimension(0).unwrap();
        let l1 = original.dimension(1).unwrap();

        let mut f = original.clone();
        let swapped = f.swap_length_width().unwrap();

        prop_assert_eq!(swapped, l0 < l1);
        prop_assert!(f.dimension(0).unwrap() >= f.dimension(1).unwrap());
        prop_assert_eq!(&f.lines()[2..], &original.lines()[2..]);
    }

    #[test]
    fn length_width_swap_is_idempotent(text in arb_fixture_text()) {
        let mut f = Fixture::parse(&text);
        f.swap_length_width().unwrap();
        let once = f.render();
        prop_assert!(!f.swap_length_width().unwrap());
        prop_assert_eq!(f.render(), once);
    }

    #[test]
    fn render_roundtrips_input(text in arb_fixture_text()) {
        prop_assert_eq!(Fixture::parse(&text).render(), text);
    }

    #[test]
    fn bom_prefix_does_not_change_value(n in -1_000_000i64..1_000_000) {
        let clean = n.to_string();
        for prefix in ["\u{feff}", "п»ї", "ï»¿"] {
            prop_assert_eq!(parse_dimension(&format!("{prefix}{clean}")), Ok(n));
        }
    }
}
