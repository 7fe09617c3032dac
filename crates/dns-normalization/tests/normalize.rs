//! Integration tests for frame normalization.

use dns_model::{AliasTable, CanonicalSchema, columns};
use dns_normalization::{NormalizationOptions, normalize_frame, normalize_frame_with_report};
use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;

fn frame(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Column::new(name.into(), values))
        .collect();
    DataFrame::new(cols).unwrap()
}

fn normalize(df: DataFrame, infer: bool) -> DataFrame {
    let options = NormalizationOptions::default().with_infer_response_from_rcode(infer);
    normalize_frame(df, &CanonicalSchema::dns(), &AliasTable::dns(), &options).unwrap()
}

#[test]
fn every_canonical_column_is_present() {
    let df = frame(vec![("query_name", vec![Some("a.example"), Some("b.example")])]);
    let out = normalize(df, false);

    assert_eq!(out.get_column_names_str(), columns::STANDARD_COLUMNS.to_vec());
    assert_eq!(out.height(), 2);
    assert_eq!(out.column(columns::IP_SRC).unwrap().null_count(), 2);
    assert_eq!(out.column(columns::DNS_RESP_TTL).unwrap().null_count(), 2);
}

#[test]
fn legacy_and_canonical_names_normalize_identically() {
    let legacy = frame(vec![
        ("timestamp", vec![Some("1700000000.5"), Some("1700000001")]),
        ("status_code", vec![Some("0"), None]),
        ("query_name", vec![Some("a.example"), Some("b.example")]),
        ("ip4_address", vec![Some("10.0.0.1"), Some("10.0.0.2")]),
    ]);
    let canonical = frame(vec![
        ("frame.time_epoch", vec![Some("1700000000.5"), Some("1700000001")]),
        ("dns.flags.rcode", vec![Some("0"), None]),
        ("dns.qry.name", vec![Some("a.example"), Some("b.example")]),
        ("ip.src", vec![Some("10.0.0.1"), Some("10.0.0.2")]),
    ]);

    let a = normalize(legacy, true);
    let b = normalize(canonical, true);
    assert!(a.equals_missing(&b));
}

#[test]
fn bad_numeric_cell_does_not_touch_other_rows() {
    let df = frame(vec![
        ("frame.time_epoch", vec![Some("1"), Some("2"), Some("3")]),
        ("dns.resp.ttl", vec![Some("300"), Some("forever"), Some("60")]),
        ("dns.qry.name", vec![Some("a"), Some("b"), Some("c")]),
    ]);
    let options = NormalizationOptions::default();
    let (out, report) = normalize_frame_with_report(
        df,
        &CanonicalSchema::dns(),
        &AliasTable::dns(),
        &options,
    )
    .unwrap();

    let ttl: Vec<Option<f64>> = out
        .column(columns::DNS_RESP_TTL)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(ttl, vec![Some(300.0), None, Some(60.0)]);
    assert_eq!(report.coercion_failures.get(columns::DNS_RESP_TTL), Some(&1));
    assert_eq!(report.total_coercion_failures(), 1);

    let names = out.column(columns::DNS_QRY_NAME).unwrap().str().unwrap();
    assert_eq!(names.get(1), Some("b"));
}

#[test]
fn inference_marks_rows_with_rcode() {
    let df = frame(vec![("status_code", vec![Some("0"), Some("3"), None])]);
    let out = normalize(df, true);
    let flags: Vec<Option<f64>> = out
        .column(columns::DNS_FLAGS_RESPONSE)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(flags, vec![Some(1.0), Some(1.0), Some(0.0)]);
}

#[test]
fn custom_schema_is_respected() {
    let mut aliases = std::collections::BTreeMap::new();
    aliases.insert("when".to_string(), "ts".to_string());
    let config = dns_model::SchemaConfig {
        columns: Some(vec!["ts".into(), "flag".into(), "rcode".into()]),
        numeric_columns: Some(vec!["ts".into(), "flag".into(), "rcode".into()]),
        timestamp_column: Some("ts".into()),
        response_flag_column: Some("flag".into()),
        response_code_column: Some("rcode".into()),
        legacy_response_code_columns: Some(vec![]),
        aliases: Some(aliases),
    };
    let (schema, aliases) = config.build().unwrap();
    let df = frame(vec![("when", vec![Some("5")]), ("rcode", vec![Some("2")])]);
    let options = NormalizationOptions::default().with_infer_response_from_rcode(true);
    let out = normalize_frame(df, &schema, &aliases, &options).unwrap();

    assert_eq!(out.get_column_names_str(), vec!["ts", "flag", "rcode"]);
    assert_eq!(out.column("flag").unwrap().f64().unwrap().get(0), Some(1.0));
}

proptest! {
    #[test]
    fn arbitrary_cells_never_fail_coercion(values in prop::collection::vec(".{0,12}", 0..24)) {
        let cells: Vec<Option<&str>> = values.iter().map(|v| Some(v.as_str())).collect();
        let df = frame(vec![("dns.resp.len", cells)]);
        let out = normalize(df, false);
        prop_assert_eq!(out.height(), values.len());
        let lens = out.column(columns::DNS_RESP_LEN).unwrap().f64().unwrap();
        for (idx, raw) in values.iter().enumerate() {
            let expected = raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan());
            prop_assert_eq!(lens.get(idx), expected);
        }
    }
}
