//! Fault-tolerant capture CSV reading.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use polars::prelude::*;
use tracing::{debug, info, warn};

use crate::compression::Compression;
use crate::error::{IngestError, Result};

use super::header::unique_headers;

/// Cell values read as null in addition to the empty string.
const DEFAULT_NULL_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for loading a capture file.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Cell values treated as missing. The empty string always is.
    pub null_tokens: Vec<String>,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            null_tokens: DEFAULT_NULL_TOKENS.iter().map(ToString::to_string).collect(),
            delimiter: b',',
        }
    }
}

impl IngestOptions {
    fn is_null(&self, value: &str) -> bool {
        value.is_empty() || self.null_tokens.iter().any(|token| token == value)
    }
}

/// A loaded capture plus load statistics.
#[derive(Debug, Clone)]
pub struct CaptureFrame {
    /// One string column per input header.
    pub frame: DataFrame,
    /// Rows kept.
    pub rows_read: usize,
    /// Malformed rows dropped.
    pub rows_skipped: usize,
    pub compression: Compression,
}

/// Load a capture CSV into a `DataFrame` of string columns.
///
/// Rows with more fields than the header, or that are not valid UTF-8, are
/// skipped; short rows are padded with nulls. Only whole-file failures
/// (missing file, no header, broken stream) return an error.
pub fn read_capture_frame(path: &Path, options: &IngestOptions) -> Result<CaptureFrame> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut buffered = BufReader::new(file);
    let leading = buffered.fill_buf().map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let compression = Compression::detect(path, leading);
    debug!(path = %path.display(), %compression, "opening capture");

    let reader: Box<dyn Read> = match compression {
        Compression::Gzip => Box::new(MultiGzDecoder::new(buffered)),
        Compression::None => Box::new(buffered),
    };
    read_records(reader, path, options, compression)
}

fn read_records(
    reader: impl Read,
    path: &Path,
    options: &IngestOptions,
    compression: Compression,
) -> Result<CaptureFrame> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let raw_headers = csv_reader.headers().map_err(|e| read_error(path, e))?.clone();
    if raw_headers.is_empty() {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let headers = unique_headers(raw_headers.iter());
    let width = headers.len();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    let mut record = ::csv::StringRecord::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;
    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) if matches!(error.kind(), ::csv::ErrorKind::Io(_)) => {
                return Err(read_error(path, error));
            }
            Err(error) => {
                rows_skipped += 1;
                debug!(
                    line = error.position().map(::csv::Position::line),
                    %error,
                    "skipping unreadable row"
                );
                continue;
            }
        }
        if record.len() > width {
            rows_skipped += 1;
            debug!(
                line = record.position().map(::csv::Position::line),
                fields = record.len(),
                expected = width,
                "skipping row with too many fields"
            );
            continue;
        }
        for (idx, column) in cells.iter_mut().enumerate() {
            let value = record
                .get(idx)
                .filter(|value| !options.is_null(value))
                .map(ToString::to_string);
            column.push(value);
        }
        rows_read += 1;
    }

    if rows_skipped > 0 {
        warn!(
            path = %path.display(),
            skipped = rows_skipped,
            "skipped malformed rows"
        );
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name.as_str().into(), values))
        .collect();
    let frame = DataFrame::new(columns)?;
    info!(
        path = %path.display(),
        rows = rows_read,
        columns = width,
        "loaded capture"
    );

    Ok(CaptureFrame {
        frame,
        rows_read,
        rows_skipped,
        compression,
    })
}

fn read_error(path: &Path, source: ::csv::Error) -> IngestError {
    IngestError::Read {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(contents: &str) -> Result<CaptureFrame> {
        read_records(
            contents.as_bytes(),
            Path::new("inline.csv"),
            &IngestOptions::default(),
            Compression::None,
        )
    }

    #[test]
    fn pads_short_rows_with_nulls() {
        let capture = read_str("a,b,c\n1,2\n").unwrap();
        let c = capture.frame.column("c").unwrap().str().unwrap();
        assert_eq!(c.get(0), None);
        assert_eq!(capture.rows_read, 1);
    }

    #[test]
    fn skips_rows_with_extra_fields() {
        let capture = read_str("a,b\n1,2\n3,4,5\n6,7\n").unwrap();
        assert_eq!(capture.frame.height(), 2);
        assert_eq!(capture.rows_skipped, 1);
        let a = capture.frame.column("a").unwrap().str().unwrap();
        assert_eq!(a.get(1), Some("6"));
    }

    #[test]
    fn null_tokens_load_as_null() {
        let capture = read_str("a,b\nNA,x\n,null\n").unwrap();
        assert_eq!(capture.frame.column("a").unwrap().null_count(), 2);
        assert_eq!(capture.frame.column("b").unwrap().null_count(), 1);
    }

    #[test]
    fn custom_delimiter_and_null_tokens() {
        let options = IngestOptions {
            null_tokens: vec!["-".to_string()],
            delimiter: b';',
        };
        let capture = read_records(
            "a;b\n-;NA\n".as_bytes(),
            Path::new("inline.csv"),
            &options,
            Compression::None,
        )
        .unwrap();
        assert_eq!(capture.frame.column("a").unwrap().null_count(), 1);
        let b = capture.frame.column("b").unwrap().str().unwrap();
        assert_eq!(b.get(0), Some("NA"));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = read_str("").unwrap_err();
        assert!(matches!(err, IngestError::MissingHeader { .. }));
    }

    #[test]
    fn header_only_input_is_an_empty_frame() {
        let capture = read_str("a,b\n").unwrap();
        assert_eq!(capture.frame.height(), 0);
        assert_eq!(capture.frame.width(), 2);
    }
}
