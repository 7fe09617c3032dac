use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors from frame normalization.
///
/// Bad cell values never end up here; they are coerced to null.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("DataFrame operation failed: {0}")]
    PolarsError(#[from] PolarsError),
}
