#![deny(unsafe_code)]

pub mod error;
pub mod schema_config;
pub mod taxonomy;

pub use crate::error::{SchemaConfigError, TaxonomyError};
pub use crate::schema_config::load_schema_config;
pub use crate::taxonomy::{load_taxonomy, parse_taxonomy, validate_label};
