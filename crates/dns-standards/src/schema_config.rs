//! Optional JSON override of the canonical schema and alias table.

use std::path::Path;

use dns_model::{AliasTable, CanonicalSchema, SchemaConfig};

use crate::error::SchemaConfigError;

/// Load a schema config file and resolve it against the DNS defaults.
pub fn load_schema_config(
    path: &Path,
) -> Result<(CanonicalSchema, AliasTable), SchemaConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| SchemaConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SchemaConfig =
        serde_json::from_str(&text).map_err(|source| SchemaConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let (schema, aliases) = config.build().map_err(|source| SchemaConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        columns = schema.columns().len(),
        aliases = aliases.len(),
        "loaded schema config"
    );
    Ok((schema, aliases))
}
