//! Shared DTOs (schemas-as-code) for the datafix workspace.
//!
//! # Design constraints
//! - Reports are printed as JSON and may be archived next to test data.
//! - Prefer adding optional fields over changing semantics.

pub mod policy;
pub mod report;
pub mod tool;

pub use policy::ErrorPolicy;

/// Schema identifiers.
pub mod schema {
    pub const DATAFIX_SWAP_V1: &str = "datafix.swap.v1";
    pub const DATAFIX_ORGANIZE_V1: &str = "datafix.organize.v1";
    pub const DATAFIX_LINE_COUNT_V1: &str = "datafix.line_count.v1";
}
