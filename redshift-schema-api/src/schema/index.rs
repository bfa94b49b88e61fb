use serde::{Deserialize, Serialize};

/// Options accepted by an index declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    /// Index name; derived from the table and the column names when omitted.
    pub name: Option<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

impl IndexOptions {
    /// Sets the index name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Makes the index unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Defines an index on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDefinition {
    /// Name of the indexed table.
    pub table: String,
    /// Name of the index.
    pub name: String,
    /// Indexed columns, in order.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

impl IndexDefinition {
    pub fn new(table: impl Into<String>, columns: Vec<String>, options: IndexOptions) -> Self {
        let table = table.into();
        let name = options
            .name
            .unwrap_or_else(|| Self::default_name(&table, &columns));
        Self {
            table,
            name,
            columns,
            unique: options.unique,
        }
    }

    /// Returns the name given to an index when none is provided (e.g. `index_users_on_email`).
    pub fn default_name(table: &str, columns: &[String]) -> String {
        format!("index_{table}_on_{}", columns.join("_and_"))
    }
}

/// Action taken on the referencing rows when the referenced row changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    Cascade,
    Nullify,
    Restrict,
    NoAction,
}

/// Options accepted by a foreign key declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKeyOptions {
    /// Local column holding the key; defaults to the singular target table name plus `_id`.
    pub column: Option<String>,
    /// Referenced column; defaults to `id`.
    pub primary_key: Option<String>,
    /// Constraint name; defaults to `fk_<from_table>_<column>`.
    pub name: Option<String>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

impl ForeignKeyOptions {
    /// Sets the local column.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Sets the referenced column.
    pub fn primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = Some(primary_key.into());
        self
    }

    /// Sets the constraint name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the action performed on delete.
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    /// Sets the action performed on update.
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }
}

/// Defines a foreign key relationship between two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    /// Name of the referencing table (e.g. "posts")
    pub from_table: String,
    /// Name of the referenced table (e.g. "users")
    pub to_table: String,
    /// Name of the local column that holds the foreign key (e.g. "user_id")
    pub column: String,
    /// Name of the referenced column (e.g. "id")
    pub primary_key: String,
    /// Name of the constraint.
    pub name: String,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

impl ForeignKeyDefinition {
    pub fn new(
        from_table: impl Into<String>,
        to_table: impl Into<String>,
        options: ForeignKeyOptions,
    ) -> Self {
        let from_table = from_table.into();
        let to_table = to_table.into();
        let column = options.column.unwrap_or_else(|| {
            let singular = to_table.strip_suffix('s').unwrap_or(&to_table);
            format!("{singular}_id")
        });
        let name = options
            .name
            .unwrap_or_else(|| format!("fk_{from_table}_{column}"));

        Self {
            from_table,
            to_table,
            column,
            primary_key: options.primary_key.unwrap_or_else(|| "id".to_string()),
            name,
            on_delete: options.on_delete,
            on_update: options.on_update,
        }
    }
}
