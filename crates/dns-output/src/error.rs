//! Error types for writing the labeled dataset.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Filesystem failure while producing the output file.
    #[error("failed to {operation} {path}: {source}")]
    Write {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or write failure.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

impl OutputError {
    pub(crate) fn write(
        operation: &'static str,
        path: &Path,
        source: std::io::Error,
    ) -> Self {
        Self::Write {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
