use redshift_schema_api::prelude::{
    ColumnOptions, ColumnType, ForeignKeyDefinition, ForeignKeyOptions, IndexDefinition,
    IndexOptions, SchemaError, SchemaResult,
};
use serde::Serialize;
use tracing::debug;

use crate::redshift::{ColumnDefinition, Table, TableDefinition};

/// Schema statements run against existing tables.
///
/// A [`Table`] handle forwards every declaration to an implementation of this trait.
pub trait SchemaStatements {
    /// Adds column `column` of type `column_type` to `table`.
    fn add_column(
        &mut self,
        table: &str,
        column: &str,
        column_type: ColumnType,
        options: ColumnOptions,
    ) -> SchemaResult<()>;

    /// Returns whether `column` of `table` is known to exist.
    ///
    /// Implementations without that knowledge return `false`.
    fn has_column(&self, _table: &str, _column: &str) -> bool {
        false
    }

    /// Removes column `column` from `table`.
    fn remove_column(&mut self, table: &str, column: &str) -> SchemaResult<()>;

    /// Renames column `from` of `table` to `to`.
    fn rename_column(&mut self, table: &str, from: &str, to: &str) -> SchemaResult<()>;

    /// Adds an index on `columns` of `table`.
    fn add_index(
        &mut self,
        table: &str,
        columns: Vec<String>,
        options: IndexOptions,
    ) -> SchemaResult<()>;

    /// Adds a foreign key from `from_table` to `to_table`.
    fn add_foreign_key(
        &mut self,
        from_table: &str,
        to_table: &str,
        options: ForeignKeyOptions,
    ) -> SchemaResult<()>;
}

/// A change to an existing table, recorded by a [`SchemaChangeset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaChange {
    /// Adds a column to a table.
    AddColumn {
        table: String,
        column: ColumnDefinition,
    },
    /// Removes a column from a table.
    RemoveColumn { table: String, column: String },
    /// Renames a column of a table.
    RenameColumn {
        table: String,
        from: String,
        to: String,
    },
    /// Adds an index.
    AddIndex(IndexDefinition),
    /// Adds a foreign key.
    AddForeignKey(ForeignKeyDefinition),
}

/// Records schema statements as an ordered list of [`SchemaChange`]s, to be handed to the DDL
/// stage.
///
/// Columns are built with [`TableDefinition::new_column_definition`], so alter-table
/// declarations get the same encoding and UUID default handling as table creation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaChangeset {
    changes: Vec<SchemaChange>,
}

impl SchemaChangeset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`Table`] handle recording into this changeset.
    pub fn alter_table(&mut self, table: impl Into<String>) -> Table<'_, Self> {
        Table::new(table, self)
    }

    /// Returns the recorded changes, in order.
    pub fn changes(&self) -> &[SchemaChange] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<SchemaChange> {
        self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns whether `column` of `table` was added by this changeset and is still in place.
    fn is_column_added(&self, table: &str, column: &str) -> bool {
        self.changes
            .iter()
            .rev()
            .find_map(|change| match change {
                SchemaChange::AddColumn { table: t, column: c } if t == table => {
                    (c.name == column).then_some(true)
                }
                SchemaChange::RemoveColumn { table: t, column: c } if t == table => {
                    (c == column).then_some(false)
                }
                SchemaChange::RenameColumn { table: t, from, to } if t == table => {
                    if to == column {
                        Some(true)
                    } else if from == column {
                        Some(false)
                    } else {
                        None
                    }
                }
                _ => None,
            })
            .unwrap_or_default()
    }

    fn record(&mut self, change: SchemaChange) {
        debug!(?change, "recording schema change");
        self.changes.push(change);
    }
}

impl SchemaStatements for SchemaChangeset {
    fn has_column(&self, table: &str, column: &str) -> bool {
        self.is_column_added(table, column)
    }

    fn add_column(
        &mut self,
        table: &str,
        column: &str,
        column_type: ColumnType,
        options: ColumnOptions,
    ) -> SchemaResult<()> {
        if self.is_column_added(table, column) {
            return Err(SchemaError::DuplicateColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }

        let mut options = options;
        let index = options.index.take();
        let definition = TableDefinition::new_column_definition(column, column_type, options);
        self.record(SchemaChange::AddColumn {
            table: table.to_string(),
            column: definition,
        });

        if let Some(index) = index {
            self.add_index(table, vec![column.to_string()], index)?;
        }
        Ok(())
    }

    fn remove_column(&mut self, table: &str, column: &str) -> SchemaResult<()> {
        self.record(SchemaChange::RemoveColumn {
            table: table.to_string(),
            column: column.to_string(),
        });
        Ok(())
    }

    fn rename_column(&mut self, table: &str, from: &str, to: &str) -> SchemaResult<()> {
        if self.is_column_added(table, to) {
            return Err(SchemaError::DuplicateColumn {
                table: table.to_string(),
                column: to.to_string(),
            });
        }

        self.record(SchemaChange::RenameColumn {
            table: table.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(())
    }

    fn add_index(
        &mut self,
        table: &str,
        columns: Vec<String>,
        options: IndexOptions,
    ) -> SchemaResult<()> {
        self.record(SchemaChange::AddIndex(IndexDefinition::new(
            table, columns, options,
        )));
        Ok(())
    }

    fn add_foreign_key(
        &mut self,
        from_table: &str,
        to_table: &str,
        options: ForeignKeyOptions,
    ) -> SchemaResult<()> {
        self.record(SchemaChange::AddForeignKey(ForeignKeyDefinition::new(
            from_table, to_table, options,
        )));
        Ok(())
    }
}
