use redshift_schema_api::prelude::{
    ColumnDeclaration, ColumnOptions, ColumnType, ForeignKeyOptions, IndexOptions, SchemaResult,
};

use crate::redshift::SchemaStatements;

/// Handle on an existing table, used to alter it.
///
/// Every declaration is forwarded to the underlying [`SchemaStatements`].
/// The Redshift column helpers (UUID primary keys, JSON and JSONB columns) are available through
/// [`crate::prelude::ColumnMethods`].
#[derive(Debug)]
pub struct Table<'a, S>
where
    S: SchemaStatements,
{
    name: String,
    statements: &'a mut S,
}

impl<'a, S> Table<'a, S>
where
    S: SchemaStatements,
{
    pub fn new(name: impl Into<String>, statements: &'a mut S) -> Self {
        Self {
            name: name.into(),
            statements,
        }
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Removes a column.
    pub fn remove(&mut self, column: &str) -> SchemaResult<&mut Self> {
        self.statements.remove_column(&self.name, column)?;
        Ok(self)
    }

    /// Renames a column.
    pub fn rename(&mut self, from: &str, to: &str) -> SchemaResult<&mut Self> {
        self.statements.rename_column(&self.name, from, to)?;
        Ok(self)
    }

    /// Adds an index on `columns`.
    pub fn index<I, C>(&mut self, columns: I, options: IndexOptions) -> SchemaResult<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        self.statements.add_index(&self.name, columns, options)?;
        Ok(self)
    }

    /// Adds a foreign key referencing `to_table`.
    pub fn foreign_key(
        &mut self,
        to_table: &str,
        options: ForeignKeyOptions,
    ) -> SchemaResult<&mut Self> {
        self.statements
            .add_foreign_key(&self.name, to_table, options)?;
        Ok(self)
    }
}

impl<S> ColumnDeclaration for Table<'_, S>
where
    S: SchemaStatements,
{
    fn has_column(&self, name: &str) -> bool {
        self.statements.has_column(&self.name, name)
    }

    fn column(
        &mut self,
        name: &str,
        column_type: ColumnType,
        options: ColumnOptions,
    ) -> SchemaResult<&mut Self> {
        self.statements
            .add_column(&self.name, name, column_type, options)?;
        Ok(self)
    }
}
