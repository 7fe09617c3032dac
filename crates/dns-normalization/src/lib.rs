//! Schema normalization for DNS capture frames.
//!
//! Turns a raw capture frame with whatever column names the exporter used
//! into a frame with exactly the canonical columns, in canonical order:
//!
//! 1. trim column names
//! 2. rename legacy columns through the alias table
//! 3. copy a legacy response-code column in when the canonical one is absent
//! 4. infer or default the response flag when absent
//! 5. backfill missing canonical columns with nulls
//! 6. coerce the numeric columns, null on failure
//! 7. project onto the canonical columns

pub mod coercion;
pub mod error;
pub mod executor;
pub mod options;

pub use coercion::{CoercedColumn, coerce_column, coerce_numeric};
pub use error::NormalizationError;
pub use executor::{
    NormalizationReport, ResponseFlagSource, normalize_frame, normalize_frame_with_report,
};
pub use options::NormalizationOptions;
