use std::path::{Path, PathBuf};

use dns_common::{any_to_f64, is_null_like};
use dns_model::CanonicalSchema;
use polars::prelude::*;
use serde::Serialize;

/// Counts reported after a successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSummary {
    pub path: PathBuf,
    pub rows: usize,
    /// Records whose response flag is non-zero.
    pub response_rows: usize,
    /// Records with a response code.
    pub rcode_non_null: usize,
}

/// Count rows, flagged responses and present response codes.
pub fn summarize(df: &DataFrame, schema: &CanonicalSchema, path: &Path) -> OutputSummary {
    let response_rows = count_cells(df, schema.response_flag(), |value| {
        any_to_f64(value.clone()).is_some_and(|v| v != 0.0)
    });
    let rcode_non_null = count_cells(df, schema.response_code(), |value| !is_null_like(value));
    OutputSummary {
        path: path.to_path_buf(),
        rows: df.height(),
        response_rows,
        rcode_non_null,
    }
}

fn count_cells(df: &DataFrame, name: &str, predicate: impl Fn(&AnyValue) -> bool) -> usize {
    let Ok(column) = df.column(name) else {
        return 0;
    };
    (0..df.height())
        .filter(|&idx| column.get(idx).is_ok_and(|value| predicate(&value)))
        .count()
}
