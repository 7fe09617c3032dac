use std::collections::{BTreeMap, BTreeSet};

use dns_model::{Label, SchemaConfig, SchemaError, Taxonomy};

#[test]
fn composite_label_joins_with_colon() {
    let label = Label::new("Flooding", "Query Flooding");
    assert_eq!(label.composite(), "Flooding:Query Flooding");
    assert_eq!(label.to_string(), "Flooding:Query Flooding");
}

#[test]
fn composite_label_does_not_escape_colons() {
    let label = Label::new("A:B", "C");
    assert_eq!(label.composite(), "A:B:C");
}

#[test]
fn taxonomy_lists_classes_sorted() {
    let mut classes = BTreeMap::new();
    classes.insert(
        "Flooding".to_string(),
        BTreeSet::from(["Query Flooding".to_string()]),
    );
    classes.insert("Benign".to_string(), BTreeSet::from(["Benign".to_string()]));
    let taxonomy = Taxonomy::new(classes);

    let names: Vec<&str> = taxonomy.class_names().collect();
    assert_eq!(names, vec!["Benign", "Flooding"]);
    assert!(taxonomy.contains_class("Benign"));
    assert!(taxonomy.subclasses("Missing").is_none());
}

#[test]
fn schema_config_parses_from_json() {
    let config: SchemaConfig = serde_json::from_str(
        r#"{
            "columns": ["ts", "flag", "rcode", "qname"],
            "numeric_columns": ["ts", "flag", "rcode"],
            "timestamp_column": "ts",
            "response_flag_column": "flag",
            "response_code_column": "rcode",
            "legacy_response_code_columns": [],
            "aliases": {"query": "qname"}
        }"#,
    )
    .expect("parse config");
    let (schema, aliases) = config.build().expect("build schema");
    assert_eq!(schema.columns(), ["ts", "flag", "rcode", "qname"]);
    assert_eq!(schema.timestamp(), "ts");
    assert_eq!(aliases.canonical_for("query"), Some("qname"));
    assert_eq!(aliases.canonical_for("timestamp"), None);
}

#[test]
fn schema_config_rejects_unknown_fields() {
    let result: Result<SchemaConfig, _> = serde_json::from_str(r#"{"colums": []}"#);
    assert!(result.is_err());
}

#[test]
fn schema_config_rejects_duplicate_columns() {
    let config = SchemaConfig {
        columns: Some(vec!["a".to_string(), "a".to_string()]),
        ..SchemaConfig::default()
    };
    assert_eq!(
        config.build().unwrap_err(),
        SchemaError::DuplicateColumn {
            column: "a".to_string()
        }
    );
}
