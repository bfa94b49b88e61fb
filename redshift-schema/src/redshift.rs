//! This module contains the Redshift flavour of the table and column definitions.

mod column_def;
mod column_methods;
mod statements;
mod table;
mod table_definition;

pub use self::column_def::ColumnDefinition;
pub use self::column_methods::ColumnMethods;
pub use self::statements::{SchemaChange, SchemaChangeset, SchemaStatements};
pub use self::table::Table;
pub use self::table_definition::{
    DEFAULT_DISTSTYLE, DEFAULT_SCHEMA, DEFAULT_SORTSTYLE, TableDefinition, TableDefinitionOptions,
};
