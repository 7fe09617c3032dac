//! Lenient numeric coercion.

use dns_common::{any_to_f64, is_null_like};
use polars::prelude::*;

/// Coerce one cell to a number; anything unparseable becomes `None`.
pub fn coerce_numeric(value: AnyValue<'_>) -> Option<f64> {
    any_to_f64(value)
}

/// A coerced column plus how many non-null cells could not be converted.
#[derive(Debug, Clone)]
pub struct CoercedColumn {
    pub column: Column,
    pub failures: usize,
}

/// Coerce every cell of a column to `Float64`, keeping the column name.
pub fn coerce_column(column: &Column) -> PolarsResult<CoercedColumn> {
    let mut values: Vec<Option<f64>> = Vec::with_capacity(column.len());
    let mut failures = 0usize;
    for idx in 0..column.len() {
        let cell = column.get(idx)?;
        let was_null = is_null_like(&cell);
        let number = coerce_numeric(cell);
        if number.is_none() && !was_null {
            failures += 1;
        }
        values.push(number);
    }
    Ok(CoercedColumn {
        column: Column::new(column.name().clone(), values),
        failures,
    })
}
