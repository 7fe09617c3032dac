//! CSV header normalization.

use std::collections::BTreeSet;

/// Normalizes a header value by trimming whitespace and a UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Normalize every header and make the names unique.
///
/// Blank names become `Unnamed: <index>`; a repeated name gets `.1`, `.2`, ...
/// appended, so no column is lost when the frame is built.
pub fn unique_headers<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut headers = Vec::new();
    for (idx, value) in raw.into_iter().enumerate() {
        let mut name = normalize_header(value);
        if name.is_empty() {
            name = format!("Unnamed: {idx}");
        }
        if seen.contains(&name) {
            let mut suffix = 1usize;
            while seen.contains(&format!("{name}.{suffix}")) {
                suffix += 1;
            }
            name = format!("{name}.{suffix}");
        }
        seen.insert(name.clone());
        headers.push(name);
    }
    headers
}
