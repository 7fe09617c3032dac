//! Labeled dataset output.
//!
//! Appends the run's label columns, orders records by capture time and
//! writes the result as CSV.

pub mod error;
pub mod label;
pub mod sort;
pub mod summary;
pub mod writer;

use std::path::Path;

use dns_model::{CanonicalSchema, Label};
use polars::prelude::DataFrame;

pub use error::{OutputError, Result};
pub use label::apply_label;
pub use sort::sort_by_timestamp;
pub use summary::{OutputSummary, summarize};
pub use writer::write_labeled_csv;

/// Label, order and write a normalized frame, then count what was written.
pub fn label_and_write(
    mut df: DataFrame,
    label: &Label,
    schema: &CanonicalSchema,
    path: &Path,
) -> Result<OutputSummary> {
    apply_label(&mut df, label)?;
    let df = sort_by_timestamp(df, schema.timestamp())?;
    write_labeled_csv(&df, path)?;
    Ok(summarize(&df, schema, path))
}
