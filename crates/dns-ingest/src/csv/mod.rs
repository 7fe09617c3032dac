//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_header, unique_headers};
pub use reader::{CaptureFrame, IngestOptions, read_capture_frame};
