use polars::prelude::*;

use crate::error::Result;

/// Stable ascending sort on the timestamp column; missing timestamps go last.
///
/// Records sharing a timestamp keep their input order. A frame without the
/// column is returned unchanged.
pub fn sort_by_timestamp(df: DataFrame, column: &str) -> Result<DataFrame> {
    if df.get_column_index(column).is_none() {
        return Ok(df);
    }
    let options = SortMultipleOptions::default()
        .with_maintain_order(true)
        .with_nulls_last(true);
    Ok(df.sort([column], options)?)
}
