use dns_model::Label;
use dns_model::columns::{CLASS, LABEL, SUBCLASS};
use polars::prelude::*;

use crate::error::Result;

/// Append `Class`, `Subclass` and `label` columns, identical on every row.
pub fn apply_label(df: &mut DataFrame, label: &Label) -> Result<()> {
    let height = df.height();
    let composite = label.composite();
    df.with_column(Column::new(CLASS.into(), vec![label.class(); height]))?;
    df.with_column(Column::new(SUBCLASS.into(), vec![label.subclass(); height]))?;
    df.with_column(Column::new(LABEL.into(), vec![composite.as_str(); height]))?;
    Ok(())
}
