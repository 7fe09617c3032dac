use thiserror::Error;

/// Errors raised while building a canonical schema or alias table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("canonical schema has no columns")]
    NoColumns,
    #[error("duplicate canonical column: {column}")]
    DuplicateColumn { column: String },
    #[error("{role} column '{column}' is not part of the canonical schema")]
    UnknownRoleColumn { role: &'static str, column: String },
    #[error("alias '{alias}' targets '{target}', which is not a canonical column")]
    UnknownAliasTarget { alias: String, target: String },
    #[error("alias '{alias}' targets '{target}', which is itself an alias")]
    AliasChain { alias: String, target: String },
}
