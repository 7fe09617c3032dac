use std::path::PathBuf;

use dns_model::Label;
use dns_output::OutputSummary;

/// Inputs of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub input: PathBuf,
    pub taxonomy: PathBuf,
    pub class: String,
    pub subclass: String,
    pub out: PathBuf,
    pub infer_response_from_rcode: bool,
    pub schema_config: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExtractResult {
    pub label: Label,
    pub summary: OutputSummary,
    pub rows_skipped: usize,
}
