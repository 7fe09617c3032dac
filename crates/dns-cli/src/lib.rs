//! CLI library components for the DNS capture labeler.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
pub mod types;
