//! Atomic CSV output.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use dns_common::any_to_string;
use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{OutputError, Result};

/// Write the frame as CSV with a header row.
///
/// Parent directories are created as needed. The data goes to a sibling
/// temporary file that is renamed over `path` once fully written, so a
/// failed run never leaves a partial file at the target. Missing values
/// are written as empty cells.
pub fn write_labeled_csv(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| OutputError::write("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_csv(df, &temp_path).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| OutputError::write("rename", path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
        return result;
    }

    info!(path = %path.display(), rows = df.height(), "wrote labeled capture");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "writing temporary output");
    let file = File::create(path).map_err(|e| OutputError::write("create", path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    let csv_error = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    writer
        .write_record(df.get_column_names_str())
        .map_err(csv_error)?;

    let columns = df.get_columns();
    let mut record: Vec<String> = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_string(column.get(idx)?));
        }
        writer.write_record(&record).map_err(csv_error)?;
    }

    let buffered = writer
        .into_inner()
        .map_err(|e| OutputError::write("flush", path, e.into_error()))?;
    let file = buffered
        .into_inner()
        .map_err(|e| OutputError::write("flush", path, e.into_error()))?;
    file.sync_all()
        .map_err(|e| OutputError::write("sync", path, e))?;
    Ok(())
}
