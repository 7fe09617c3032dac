//! Attack taxonomy loading and label validation.
//!
//! The taxonomy is a JSON object mapping each class name to a list of
//! entries. An entry may name its `SubClass`; without one the subclass is
//! the class name itself:
//!
//! ```json
//! {
//!   "Benign": [{"Description": "normal resolver traffic"}],
//!   "Flooding": [{"SubClass": "Query Flooding"}, {"SubClass": "Response Flooding"}]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use dns_model::{Label, Taxonomy};

use crate::error::TaxonomyError;

const SUBCLASS_KEY: &str = "SubClass";

/// Read and parse a taxonomy document.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy, TaxonomyError> {
    let text = std::fs::read_to_string(path)
        .map_err(|error| TaxonomyError::format(path, format!("cannot read file: {error}")))?;
    parse_taxonomy(&text, path)
}

/// Parse a taxonomy document; `origin` is only used in error messages.
pub fn parse_taxonomy(text: &str, origin: &Path) -> Result<Taxonomy, TaxonomyError> {
    let document: Value = serde_json::from_str(text)
        .map_err(|error| TaxonomyError::format(origin, format!("not valid JSON: {error}")))?;
    let Value::Object(entries) = document else {
        return Err(TaxonomyError::format(
            origin,
            "top level must be a JSON object",
        ));
    };
    if entries.is_empty() {
        return Err(TaxonomyError::format(origin, "taxonomy object is empty"));
    }

    let mut classes = BTreeMap::new();
    for (class, items) in entries {
        let subclasses = collect_subclasses(&class, &items, origin)?;
        if subclasses.is_empty() {
            warn!(class = %class, "taxonomy class has no subclasses");
        }
        classes.insert(class, subclasses);
    }
    let taxonomy = Taxonomy::new(classes);
    debug!(
        path = %origin.display(),
        classes = taxonomy.len(),
        "loaded taxonomy"
    );
    Ok(taxonomy)
}

fn collect_subclasses(
    class: &str,
    items: &Value,
    origin: &Path,
) -> Result<BTreeSet<String>, TaxonomyError> {
    let mut subclasses = BTreeSet::new();
    // Non-list values describe a class without subclass entries.
    let Value::Array(items) = items else {
        return Ok(subclasses);
    };
    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(TaxonomyError::format(
                origin,
                format!("entry {index} of class \"{class}\" is not an object"),
            ));
        };
        let name = match fields.get(SUBCLASS_KEY) {
            None | Some(Value::Null) => class.trim().to_string(),
            Some(Value::String(name)) => name.trim().to_string(),
            Some(other) => other.to_string().trim().to_string(),
        };
        if !name.is_empty() {
            subclasses.insert(name);
        }
    }
    Ok(subclasses)
}

/// Check a requested class/subclass pair against the taxonomy.
///
/// The class is checked first; the subclass is only looked up in that
/// class's own set.
pub fn validate_label(
    taxonomy: &Taxonomy,
    class: &str,
    subclass: &str,
) -> Result<Label, TaxonomyError> {
    let class = class.trim();
    let subclass = subclass.trim();

    let Some(allowed) = taxonomy.subclasses(class) else {
        return Err(TaxonomyError::InvalidClass {
            class: class.to_string(),
            allowed: taxonomy.class_names().map(ToString::to_string).collect(),
        });
    };
    if !allowed.contains(subclass) {
        return Err(TaxonomyError::InvalidSubclass {
            class: class.to_string(),
            subclass: subclass.to_string(),
            allowed: allowed.iter().cloned().collect(),
        });
    }
    Ok(Label::new(class, subclass))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Taxonomy, TaxonomyError> {
        parse_taxonomy(text, Path::new("taxonomy.json"))
    }

    #[test]
    fn subclass_defaults_to_class_name() {
        let taxonomy = parse(r#"{"Benign": [{}]}"#).unwrap();
        let subs = taxonomy.subclasses("Benign").unwrap();
        assert_eq!(subs.iter().collect::<Vec<_>>(), vec!["Benign"]);
    }

    #[test]
    fn default_subclass_is_trimmed() {
        let taxonomy = parse(r#"{"Benign ": [{"SubClass": null}]}"#).unwrap();
        let subs = taxonomy.subclasses("Benign ").unwrap();
        assert_eq!(subs.iter().collect::<Vec<_>>(), vec!["Benign"]);
    }

    #[test]
    fn blank_subclasses_are_dropped() {
        let taxonomy =
            parse(r#"{"Flooding": [{"SubClass": "  "}, {"SubClass": " Query Flooding "}]}"#)
                .unwrap();
        let subs = taxonomy.subclasses("Flooding").unwrap();
        assert_eq!(subs.iter().collect::<Vec<_>>(), vec!["Query Flooding"]);
    }

    #[test]
    fn non_list_class_has_no_subclasses() {
        let taxonomy = parse(r#"{"Benign": "all normal traffic"}"#).unwrap();
        assert!(taxonomy.contains_class("Benign"));
        assert!(taxonomy.subclasses("Benign").unwrap().is_empty());
    }

    #[test]
    fn non_object_entry_is_rejected() {
        let err = parse(r#"{"Benign": ["Benign"]}"#).unwrap_err();
        assert!(matches!(err, TaxonomyError::Format { .. }));
    }

    #[test]
    fn numeric_subclass_is_rendered_as_text() {
        let taxonomy = parse(r#"{"Tunneling": [{"SubClass": 53}]}"#).unwrap();
        assert!(taxonomy.subclasses("Tunneling").unwrap().contains("53"));
    }

    #[test]
    fn validation_trims_inputs() {
        let taxonomy = parse(r#"{"Benign": [{}]}"#).unwrap();
        let label = validate_label(&taxonomy, " Benign ", "Benign\t").unwrap();
        assert_eq!(label.composite(), "Benign:Benign");
    }
}
