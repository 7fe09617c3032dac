//! Shared utilities for the DNS capture labeler crates.
//!
//! This crate provides the Polars `AnyValue` helpers used when cells move
//! between the loaded frame, the normalizer, and the CSV writer.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_f64, any_to_string, format_numeric, is_null_like, parse_f64};
