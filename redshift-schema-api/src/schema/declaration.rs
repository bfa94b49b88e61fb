use tracing::debug;

use crate::SchemaResult;
use crate::schema::{ColumnOptions, ColumnType, IndexOptions, ReferenceOptions};

/// Generic column declaration capability of a table-builder.
///
/// Implementors only provide [`ColumnDeclaration::column`]; the generic primary key
/// declaration and the typed helpers are built upon it. Dialect extensions are layered on top
/// of this trait and call back into it for every input they don't special-case.
pub trait ColumnDeclaration {
    /// Declares a column named `name` of type `column_type`.
    fn column(
        &mut self,
        name: &str,
        column_type: ColumnType,
        options: ColumnOptions,
    ) -> SchemaResult<&mut Self>;

    /// Returns whether a column named `name` is already declared.
    ///
    /// Builders which can't tell return `false`, leaving the check to
    /// [`ColumnDeclaration::column`].
    fn has_column(&self, _name: &str) -> bool {
        false
    }

    /// Declares a primary key column, with no dialect involvement.
    fn generic_primary_key(
        &mut self,
        name: &str,
        column_type: ColumnType,
        options: ColumnOptions,
    ) -> SchemaResult<&mut Self> {
        self.column(name, column_type, options.primary_key(true))
    }

    fn string(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::String, options)
    }

    fn text(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Text, options)
    }

    fn integer(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Integer, options)
    }

    fn bigint(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::BigInt, options)
    }

    fn float(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Float, options)
    }

    fn decimal(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Decimal, options)
    }

    fn numeric(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Numeric, options)
    }

    fn datetime(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Datetime, options)
    }

    fn timestamp(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Timestamp, options)
    }

    fn time(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Time, options)
    }

    fn date(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Date, options)
    }

    fn binary(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Binary, options)
    }

    fn boolean(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Boolean, options)
    }

    fn uuid(&mut self, name: &str, options: ColumnOptions) -> SchemaResult<&mut Self> {
        self.column(name, ColumnType::Uuid, options)
    }

    /// Declares the `created_at` and `updated_at` columns.
    ///
    /// Both columns are `NOT NULL` unless `options` says otherwise. If either column is already
    /// declared, neither is added.
    fn timestamps(&mut self, options: ColumnOptions) -> SchemaResult<&mut Self> {
        let options = match options.null {
            Some(_) => options,
            None => options.null(false),
        };
        if let Some(existing) = ["created_at", "updated_at"]
            .into_iter()
            .find(|name| self.has_column(name))
        {
            // rejected by the builder without declaring anything
            return self.column(existing, ColumnType::Datetime, options);
        }
        self.column("created_at", ColumnType::Datetime, options.clone())?;
        self.column("updated_at", ColumnType::Datetime, options)
    }

    /// Declares a `<name>_id` reference column.
    fn references(&mut self, name: &str, options: ReferenceOptions) -> SchemaResult<&mut Self> {
        let column_name = format!("{name}_id");
        let column_type = options.column_type.unwrap_or(ColumnType::BigInt);
        debug!(reference = name, column = %column_name, %column_type, "declaring reference column");

        let mut column_options = ColumnOptions::default();
        column_options.null = options.null;
        if options.index {
            column_options = column_options.index(IndexOptions::default());
        }
        self.column(&column_name, column_type, column_options)
    }
}
