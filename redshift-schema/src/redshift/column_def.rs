use redshift_schema_api::prelude::{ColumnDefault, ColumnType};
use serde::{Deserialize, Serialize};

/// Defines a column of a Redshift table.
///
/// Superset of the generic column attributes, adding the `ENCODE` hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// The name of the column.
    pub name: String,
    /// The type tag of the column.
    pub column_type: ColumnType,
    pub limit: Option<u32>,
    /// Compression encoding of the column (e.g. `zstd`).
    pub encode: Option<String>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub default: Option<ColumnDefault>,
    /// Indicates if this column can contain NULL values.
    pub null: Option<bool>,
    pub first: Option<bool>,
    pub after: Option<String>,
    pub auto_increment: Option<bool>,
    /// Explicit primary key flag.
    pub primary_key: bool,
    pub collation: Option<String>,
    /// Raw SQL type, overriding the one derived from the type tag.
    pub sql_type: Option<String>,
    pub comment: Option<String>,
}

impl ColumnDefinition {
    /// Creates a column definition with only name and type set.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            limit: None,
            encode: None,
            precision: None,
            scale: None,
            default: None,
            null: None,
            first: None,
            after: None,
            auto_increment: None,
            primary_key: false,
            collation: None,
            sql_type: None,
            comment: None,
        }
    }

    /// Returns whether this column is a primary key, either because it was flagged as such or
    /// because of its reserved [`ColumnType::PrimaryKey`] type.
    pub fn is_primary_key(&self) -> bool {
        self.primary_key || self.column_type.is_primary_key()
    }
}
