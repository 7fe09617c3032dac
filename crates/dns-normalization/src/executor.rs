//! DataFrame normalization execution.
//!
//! Executes the normalization steps on a raw capture frame to produce a
//! frame with exactly the canonical columns.

use std::collections::BTreeMap;

use dns_model::{AliasTable, CanonicalSchema};
use polars::prelude::*;

use crate::coercion::coerce_column;
use crate::error::NormalizationError;
use crate::options::NormalizationOptions;

/// Where the response flag column came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFlagSource {
    /// The input carried the flag.
    #[default]
    Present,
    /// Set to 1 where the response code is non-null.
    InferredFromRcode,
    /// No ground truth: every record assumed to be a query.
    DefaultedToZero,
}

/// What normalization changed, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    /// `(from, to)` column renames, header trimming included.
    pub renamed: Vec<(String, String)>,
    /// Legacy response-code column copied into the canonical one.
    pub rcode_fallback: Option<String>,
    pub response_flag: ResponseFlagSource,
    /// Canonical columns created all-null.
    pub backfilled: Vec<String>,
    /// Non-null cells per numeric column that could not be converted.
    pub coercion_failures: BTreeMap<String, usize>,
    /// Input columns outside the canonical schema.
    pub dropped: Vec<String>,
}

impl NormalizationReport {
    pub fn total_coercion_failures(&self) -> usize {
        self.coercion_failures.values().sum()
    }
}

/// Normalize a raw capture frame onto the canonical schema.
pub fn normalize_frame(
    df: DataFrame,
    schema: &CanonicalSchema,
    aliases: &AliasTable,
    options: &NormalizationOptions,
) -> Result<DataFrame, NormalizationError> {
    normalize_frame_with_report(df, schema, aliases, options).map(|(df, _)| df)
}

/// Normalize a raw capture frame and report what changed.
pub fn normalize_frame_with_report(
    mut df: DataFrame,
    schema: &CanonicalSchema,
    aliases: &AliasTable,
    options: &NormalizationOptions,
) -> Result<(DataFrame, NormalizationReport), NormalizationError> {
    let mut report = NormalizationReport::default();

    trim_column_names(&mut df, &mut report)?;
    apply_aliases(&mut df, aliases, &mut report)?;
    apply_rcode_fallback(&mut df, schema, &mut report)?;
    ensure_response_flag(&mut df, schema, options, &mut report)?;
    backfill_columns(&mut df, schema, &mut report)?;
    coerce_numeric_columns(&mut df, schema, &mut report)?;

    report.dropped = df
        .get_column_names_str()
        .into_iter()
        .filter(|name| !schema.contains(name))
        .map(ToString::to_string)
        .collect();
    if !report.dropped.is_empty() {
        tracing::debug!(columns = ?report.dropped, "dropping non-canonical columns");
    }
    let projected = df.select(schema.columns().iter().map(String::as_str))?;

    Ok((projected, report))
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

fn owned_column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names_str()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

fn trim_column_names(
    df: &mut DataFrame,
    report: &mut NormalizationReport,
) -> Result<(), NormalizationError> {
    for name in owned_column_names(df) {
        let trimmed = name.trim();
        if trimmed == name {
            continue;
        }
        if has_column(df, trimmed) {
            tracing::warn!(
                column = %name,
                "dropping column whose trimmed name duplicates another column"
            );
            df.drop_in_place(&name)?;
            continue;
        }
        df.rename(&name, trimmed.into())?;
        report.renamed.push((name.clone(), trimmed.to_string()));
    }
    Ok(())
}

fn apply_aliases(
    df: &mut DataFrame,
    aliases: &AliasTable,
    report: &mut NormalizationReport,
) -> Result<(), NormalizationError> {
    for (alias, target) in aliases.iter() {
        if !has_column(df, alias) {
            continue;
        }
        if has_column(df, target) {
            tracing::debug!(
                alias,
                target,
                "canonical column already present, dropping legacy column"
            );
            df.drop_in_place(alias)?;
            continue;
        }
        df.rename(alias, target.into())?;
        tracing::debug!(alias, target, "renamed legacy column");
        report.renamed.push((alias.to_string(), target.to_string()));
    }
    Ok(())
}

fn apply_rcode_fallback(
    df: &mut DataFrame,
    schema: &CanonicalSchema,
    report: &mut NormalizationReport,
) -> Result<(), NormalizationError> {
    let target = schema.response_code();
    if has_column(df, target) {
        return Ok(());
    }
    let Some(legacy) = schema
        .legacy_response_codes()
        .iter()
        .find(|legacy| has_column(df, legacy))
    else {
        return Ok(());
    };
    let mut column = df
        .column(legacy)
        .map_err(|_| NormalizationError::ColumnNotFound(legacy.clone()))?
        .clone();
    column.rename(target.into());
    df.with_column(column)?;
    tracing::debug!(from = %legacy, to = target, "copied legacy response code column");
    report.rcode_fallback = Some(legacy.clone());
    Ok(())
}

fn ensure_response_flag(
    df: &mut DataFrame,
    schema: &CanonicalSchema,
    options: &NormalizationOptions,
    report: &mut NormalizationReport,
) -> Result<(), NormalizationError> {
    let flag = schema.response_flag();
    if has_column(df, flag) {
        report.response_flag = ResponseFlagSource::Present;
        return Ok(());
    }

    let height = df.height();
    let rcode = schema.response_code();
    let (values, source) = if options.infer_response_from_rcode && has_column(df, rcode) {
        // Null tokens are already nulls after ingest; any other text,
        // blank included, counts as a response code.
        let values: Vec<i64> = df
            .column(rcode)?
            .is_null()
            .into_iter()
            .map(|missing| if missing == Some(true) { 0 } else { 1 })
            .collect();
        (values, ResponseFlagSource::InferredFromRcode)
    } else {
        (vec![0i64; height], ResponseFlagSource::DefaultedToZero)
    };

    df.with_column(Column::new(flag.into(), values))?;
    tracing::info!(column = flag, source = ?source, "response flag column was absent");
    report.response_flag = source;
    Ok(())
}

fn backfill_columns(
    df: &mut DataFrame,
    schema: &CanonicalSchema,
    report: &mut NormalizationReport,
) -> Result<(), NormalizationError> {
    let height = df.height();
    for name in schema.columns() {
        if has_column(df, name) {
            continue;
        }
        df.with_column(Column::full_null(
            name.as_str().into(),
            height,
            &DataType::String,
        ))?;
        report.backfilled.push(name.clone());
    }
    if !report.backfilled.is_empty() {
        tracing::debug!(columns = ?report.backfilled, "backfilled missing canonical columns");
    }
    Ok(())
}

fn coerce_numeric_columns(
    df: &mut DataFrame,
    schema: &CanonicalSchema,
    report: &mut NormalizationReport,
) -> Result<(), NormalizationError> {
    for name in schema.numeric_columns() {
        let coerced = {
            let column = df
                .column(name)
                .map_err(|_| NormalizationError::ColumnNotFound(name.to_string()))?;
            coerce_column(column)?
        };
        if coerced.failures > 0 {
            tracing::debug!(
                column = name,
                failures = coerced.failures,
                "non-numeric values coerced to null"
            );
            report
                .coercion_failures
                .insert(name.to_string(), coerced.failures);
        }
        df.with_column(coerced.column)?;
    }
    Ok(())
}
