#![deny(unsafe_code)]

use std::path::PathBuf;

use dns_model::SchemaError;

#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("invalid taxonomy {path}: {reason}")]
    Format { path: PathBuf, reason: String },

    #[error("invalid class \"{class}\". Allowed: [{}]", quoted_list(.allowed))]
    InvalidClass { class: String, allowed: Vec<String> },

    #[error(
        "invalid subclass \"{subclass}\" for class \"{class}\". Allowed: [{}]",
        quoted_list(.allowed)
    )]
    InvalidSubclass {
        class: String,
        subclass: String,
        allowed: Vec<String>,
    },
}

impl TaxonomyError {
    pub(crate) fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaConfigError {
    #[error("failed to read schema config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema config {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}

fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
