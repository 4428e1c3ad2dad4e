//! Dimension fixture normalization.
//!
//! A fixture (`testdata.txt`) holds three integer lines: length, width and
//! height of the measured object, in that order once normalized. Older captures
//! were written with width and height exchanged and sometimes with length and
//! width exchanged as well. This crate provides:
//! - [`Fixture`]: the in-memory line model with the two swap rules.
//! - [`parse_dimension`]: integer parsing tolerant of encoding debris.
//! - File-level helpers that rewrite fixtures atomically.

mod error;
mod file;
mod fixture;
mod parse;

pub use error::{FixtureError, FixtureResult};
pub use file::{
    FixtureChange, normalize_in_place, read_fixture, render_patch, swap_length_width_in_place,
    swap_width_height_in_place, write_atomic,
};
pub use fixture::{Fixture, Line, LineEnding, MIN_LINES, NormalizeOutcome};
pub use parse::parse_dimension;
