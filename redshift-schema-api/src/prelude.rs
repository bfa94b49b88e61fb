//! Prelude exposes all the types for `redshift-schema-api` crate.

pub use crate::error::{SchemaError, SchemaResult};
pub use crate::schema::*;
