//! Directory scanning for datafix.
//!
//! The test-data tree is one level deep: a root holding one directory per capture
//! session, each with exactly one fixture file next to its captures. This crate
//! lists those directories, finds the fixture in each, and runs a per-directory
//! closure under an [`ErrorPolicy`].

mod dispatch;
mod find;

pub use dispatch::{Dispatch, DirOutcome, dispatch_subdirs};
pub use find::{FixtureLookup, ScanError, find_fixture, list_files, list_subdirs};

pub use datafix_types::ErrorPolicy;

/// Default fixture file name pattern.
pub const DEFAULT_FIXTURE_PATTERN: &str = "testdata.txt";
