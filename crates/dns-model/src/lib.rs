pub mod columns;
pub mod error;
pub mod label;
pub mod schema;
pub mod taxonomy;

pub use error::SchemaError;
pub use label::Label;
pub use schema::{AliasTable, CanonicalSchema, SchemaConfig};
pub use taxonomy::Taxonomy;
