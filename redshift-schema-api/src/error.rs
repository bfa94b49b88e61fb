use thiserror::Error;

/// An enum representing the errors raised while declaring a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A column with the same name is already declared on the table.
    #[error("Column '{column}' is already defined on table '{table}'")]
    DuplicateColumn { table: String, column: String },
    /// Tried to declare a column with the name of the table primary key.
    #[error(
        "Cannot redefine the primary key column '{column}' of table '{table}'; declare the table without an implicit id to use a custom primary key"
    )]
    PrimaryKeyRedefinition { table: String, column: String },
    /// Tried to reference a column that is not declared on the table.
    #[error("Unknown column '{column}' on table '{table}'")]
    UnknownColumn { table: String, column: String },
}

/// Schema declaration result type.
pub type SchemaResult<T> = Result<T, SchemaError>;
