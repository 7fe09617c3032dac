//! DNS capture ingestion.
//!
//! This crate loads a raw capture export (CSV, optionally gzip-compressed)
//! into a Polars `DataFrame` of string columns.
//!
//! # Features
//!
//! - **Compression detection**: gzip by magic bytes or `.gz` extension
//! - **Row-level fault tolerance**: malformed rows are skipped and counted
//! - **Header cleanup**: trimmed, blank and duplicate names made unique
//! - **Null tokens**: empty cells and common NA spellings load as null
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dns_ingest::{IngestOptions, read_capture_frame};
//!
//! let capture = read_capture_frame(Path::new("captures/benign.csv.gz"), &IngestOptions::default())?;
//! println!("{} rows, {} skipped", capture.frame.height(), capture.rows_skipped);
//! ```

mod compression;
mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use compression::Compression;
pub use csv::{CaptureFrame, IngestOptions, normalize_header, read_capture_frame, unique_headers};
