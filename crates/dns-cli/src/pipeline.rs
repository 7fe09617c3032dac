//! Extraction pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Label**: load the taxonomy and validate the requested class/subclass
//! 2. **Schema**: resolve the canonical schema and alias table
//! 3. **Ingest**: read the capture file
//! 4. **Normalize**: map the capture onto the canonical schema
//! 5. **Output**: label, order and write the dataset
//!
//! Stages 1 and 2 only touch small configuration files, so a bad label or
//! schema fails before the capture is read.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use dns_ingest::{CaptureFrame, IngestOptions, read_capture_frame};
use dns_model::{AliasTable, CanonicalSchema, Label};
use dns_normalization::{NormalizationOptions, normalize_frame_with_report};
use dns_output::{OutputSummary, label_and_write};
use dns_standards::{load_schema_config, load_taxonomy, validate_label};

use crate::types::{ExtractRequest, ExtractResult};

// ============================================================================
// Stage 1: Label
// ============================================================================

/// Load the taxonomy and check the label against it.
pub fn resolve_label(taxonomy: &Path, class: &str, subclass: &str) -> Result<Label> {
    let taxonomy = load_taxonomy(taxonomy).context("load taxonomy")?;
    let label = validate_label(&taxonomy, class, subclass).context("validate label")?;
    debug!(label = %label, "label accepted");
    Ok(label)
}

// ============================================================================
// Stage 2: Schema
// ============================================================================

/// Built-in DNS schema, or the one described by a schema config file.
pub fn resolve_schema(schema_config: Option<&Path>) -> Result<(CanonicalSchema, AliasTable)> {
    match schema_config {
        Some(path) => load_schema_config(path)
            .with_context(|| format!("load schema config {}", path.display())),
        None => Ok((CanonicalSchema::dns(), AliasTable::dns())),
    }
}

// ============================================================================
// Stage 3: Ingest
// ============================================================================

pub fn ingest(input: &Path) -> Result<CaptureFrame> {
    read_capture_frame(input, &IngestOptions::default())
        .with_context(|| format!("read capture {}", input.display()))
}

// ============================================================================
// Stage 4: Normalize
// ============================================================================

pub fn normalize(
    frame: DataFrame,
    schema: &CanonicalSchema,
    aliases: &AliasTable,
    options: &NormalizationOptions,
) -> Result<DataFrame> {
    let (df, report) =
        normalize_frame_with_report(frame, schema, aliases, options).context("normalize capture")?;
    info!(
        renamed = report.renamed.len(),
        backfilled = report.backfilled.len(),
        dropped = report.dropped.len(),
        coercion_failures = report.total_coercion_failures(),
        response_flag = ?report.response_flag,
        "normalized capture"
    );
    Ok(df)
}

// ============================================================================
// Stage 5: Output
// ============================================================================

pub fn output(
    df: DataFrame,
    label: &Label,
    schema: &CanonicalSchema,
    out: &Path,
) -> Result<OutputSummary> {
    label_and_write(df, label, schema, out)
        .with_context(|| format!("write output {}", out.display()))
}

/// Run every stage for one capture file.
pub fn run_extract(request: &ExtractRequest) -> Result<ExtractResult> {
    let span = info_span!(
        "extract",
        input = %request.input.display(),
        class = %request.class,
        subclass = %request.subclass
    );
    let _guard = span.enter();
    let started = Instant::now();

    let label = resolve_label(&request.taxonomy, &request.class, &request.subclass)?;
    let (schema, aliases) = resolve_schema(request.schema_config.as_deref())?;

    let ingest_start = Instant::now();
    let capture = ingest(&request.input)?;
    info!(
        rows = capture.rows_read,
        skipped = capture.rows_skipped,
        compression = %capture.compression,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    let rows_skipped = capture.rows_skipped;

    let options = NormalizationOptions::default()
        .with_infer_response_from_rcode(request.infer_response_from_rcode);
    let df = normalize(capture.frame, &schema, &aliases, &options)?;

    let summary = output(df, &label, &schema, &request.out)?;
    info!(
        rows = summary.rows,
        duration_ms = started.elapsed().as_millis(),
        "extract complete"
    );

    Ok(ExtractResult {
        label,
        summary,
        rows_skipped,
    })
}
