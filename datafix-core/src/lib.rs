//! Embeddable core library for datafix.
//!
//! Provides clap-free entry points that turn settings into run reports:
//!
//! - [`run_swap`](pipeline::run_swap) — normalize every session's fixture
//! - [`run_organize`](pipeline::run_organize) — move captures, drop sentinels
//! - [`run_line_count`](pipeline::run_line_count) — per-project line counts
//!
//! Per-directory failures end up in the report; only problems with the root
//! itself are returned as [`ToolError`](pipeline::ToolError).

pub mod pipeline;
pub mod settings;

pub use datafix_types::ErrorPolicy;
