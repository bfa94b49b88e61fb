use redshift_schema_api::prelude::{
    ColumnDeclaration, ColumnDefault, ColumnOptions, ColumnType, SchemaResult,
};
use tracing::debug;

/// Redshift column declaration helpers.
///
/// Implemented for every [`ColumnDeclaration`], so both [`crate::prelude::TableDefinition`] and
/// [`crate::prelude::Table`] carry them.
pub trait ColumnMethods: ColumnDeclaration {
    /// Defines the primary key column.
    ///
    /// Any type other than [`ColumnType::Uuid`] is declared through
    /// [`ColumnDeclaration::generic_primary_key`] untouched.
    ///
    /// UUID primary keys default to `uuid_generate_v4()` from the `uuid-ossp` extension, which
    /// must be enabled on the database. Another generation function can be given as default.
    /// To use a UUID primary key without `uuid-ossp`, set the default explicitly to null with
    /// [`ColumnOptions::default_null`]: the application must then provide a UUID for every
    /// record before inserting it.
    ///
    /// ```rust
    /// use redshift_schema::prelude::*;
    ///
    /// let mut table = TableDefinition::new("stuffs");
    /// table
    ///     .primary_key("id", ColumnType::Uuid, ColumnOptions::default().default_null())
    ///     .unwrap();
    /// let id = table.column_definition("id").unwrap();
    /// assert!(id.default.is_none());
    /// assert!(id.is_primary_key());
    /// ```
    fn primary_key(
        &mut self,
        name: &str,
        column_type: ColumnType,
        mut options: ColumnOptions,
    ) -> SchemaResult<&mut Self> {
        if column_type.clone().aliased() != ColumnType::Uuid {
            return self.generic_primary_key(name, column_type, options);
        }

        if !options.has_default() {
            debug!(column = name, "defaulting UUID primary key to uuid_generate_v4()");
            options.default = Some(Some(ColumnDefault::uuid_generate_v4()));
        }
        options.primary_key = Some(true);
        self.column(name, ColumnType::Uuid, options)
    }

    /// Declares a `JSON` column.
    fn json(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Json, options)
    }

    /// Declares a `JSONB` column.
    fn jsonb(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Jsonb, options)
    }
}

impl<T> ColumnMethods for T where T: ColumnDeclaration {}
