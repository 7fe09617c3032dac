//! Error types for capture ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a capture file.
///
/// Individual malformed rows never surface here; these are whole-file
/// failures.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Capture file not found.
    #[error("capture file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The stream broke while reading records (e.g. a truncated gzip member).
    #[error("failed to read records from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /// The file has no header row.
    #[error("no header row in {path}")]
    MissingHeader { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/captures/day1.csv"),
        };
        assert_eq!(err.to_string(), "capture file not found: /captures/day1.csv");
    }

    #[test]
    fn test_open_maps_not_found() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(
            IngestError::open("x.csv", io),
            IngestError::FileNotFound { .. }
        ));
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            IngestError::open("x.csv", io),
            IngestError::FileRead { .. }
        ));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
