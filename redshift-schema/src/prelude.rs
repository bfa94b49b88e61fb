//! Re-exports all the most commonly used items from this crate.

pub use redshift_schema_api::prelude::*;

pub use crate::redshift::{
    ColumnDefinition, ColumnMethods, SchemaChange, SchemaChangeset, SchemaStatements, Table,
    TableDefinition, TableDefinitionOptions,
};
