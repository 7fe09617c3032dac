//! Canonical schema and alias table.
//!
//! Both are immutable values built once at startup and handed to the
//! normalizer, so tests can swap in a different schema without touching
//! shared state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::SchemaError;

/// The ordered output columns plus the columns with a special role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSchema {
    columns: Vec<String>,
    numeric: BTreeSet<String>,
    timestamp: String,
    response_flag: String,
    response_code: String,
    legacy_response_codes: Vec<String>,
}

impl CanonicalSchema {
    /// The DNS capture schema.
    pub fn dns() -> Self {
        Self {
            columns: columns::STANDARD_COLUMNS.iter().map(ToString::to_string).collect(),
            numeric: columns::NUMERIC_COLUMNS.iter().map(ToString::to_string).collect(),
            timestamp: columns::FRAME_TIME_EPOCH.to_string(),
            response_flag: columns::DNS_FLAGS_RESPONSE.to_string(),
            response_code: columns::DNS_FLAGS_RCODE.to_string(),
            legacy_response_codes: vec![columns::DNS_RCODE_LEGACY.to_string()],
        }
    }

    /// Canonical columns in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Whether the column is coerced to a number.
    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric.contains(column)
    }

    /// Numeric columns in canonical order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| self.numeric.contains(c.as_str()))
            .map(String::as_str)
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn response_flag(&self) -> &str {
        &self.response_flag
    }

    pub fn response_code(&self) -> &str {
        &self.response_code
    }

    /// Alternate response-code columns copied in when the canonical one is absent.
    pub fn legacy_response_codes(&self) -> &[String] {
        &self.legacy_response_codes
    }
}

impl Default for CanonicalSchema {
    fn default() -> Self {
        Self::dns()
    }
}

/// Legacy column name to canonical column name, applied once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// The DNS alias table.
    pub fn dns() -> Self {
        Self {
            entries: columns::ALIASES
                .iter()
                .map(|(alias, target)| ((*alias).to_string(), (*target).to_string()))
                .collect(),
        }
    }

    /// Build an alias table, rejecting targets outside the schema and alias chains.
    pub fn new(
        entries: BTreeMap<String, String>,
        schema: &CanonicalSchema,
    ) -> Result<Self, SchemaError> {
        for (alias, target) in &entries {
            if entries.contains_key(target) {
                return Err(SchemaError::AliasChain {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
            if !schema.contains(target) {
                return Err(SchemaError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Canonical name for a legacy column, if it has one.
    pub fn canonical_for(&self, column: &str) -> Option<&str> {
        self.entries.get(column).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk schema override. Every field falls back to the DNS default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    pub columns: Option<Vec<String>>,
    pub numeric_columns: Option<Vec<String>>,
    pub timestamp_column: Option<String>,
    pub response_flag_column: Option<String>,
    pub response_code_column: Option<String>,
    pub legacy_response_code_columns: Option<Vec<String>>,
    pub aliases: Option<BTreeMap<String, String>>,
}

impl SchemaConfig {
    /// Resolve the config against the DNS defaults and check it.
    pub fn build(self) -> Result<(CanonicalSchema, AliasTable), SchemaError> {
        let defaults = CanonicalSchema::dns();
        let columns = self.columns.unwrap_or(defaults.columns);
        if columns.is_empty() {
            return Err(SchemaError::NoColumns);
        }
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }

        let schema = CanonicalSchema {
            numeric: self
                .numeric_columns
                .map(|cols| cols.into_iter().collect())
                .unwrap_or(defaults.numeric),
            timestamp: self.timestamp_column.unwrap_or(defaults.timestamp),
            response_flag: self.response_flag_column.unwrap_or(defaults.response_flag),
            response_code: self.response_code_column.unwrap_or(defaults.response_code),
            legacy_response_codes: self
                .legacy_response_code_columns
                .unwrap_or(defaults.legacy_response_codes),
            columns,
        };

        let roles = [
            ("timestamp", schema.timestamp.as_str()),
            ("response flag", schema.response_flag.as_str()),
            ("response code", schema.response_code.as_str()),
        ];
        for (role, column) in roles {
            if !schema.contains(column) {
                return Err(SchemaError::UnknownRoleColumn {
                    role,
                    column: column.to_string(),
                });
            }
        }
        if let Some(column) = schema.numeric.iter().find(|c| !schema.contains(c)) {
            return Err(SchemaError::UnknownRoleColumn {
                role: "numeric",
                column: column.clone(),
            });
        }

        let aliases = match self.aliases {
            Some(entries) => AliasTable::new(entries, &schema)?,
            None => AliasTable::new(AliasTable::dns().entries, &schema)?,
        };
        Ok((schema, aliases))
    }
}
