use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::{ColumnDefault, ColumnType, IndexOptions};

/// Options mapping of a column declaration.
///
/// Every option is optional and left to the column factory to interpret.
/// Deserializing from a mapping ignores any key this struct doesn't know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
    pub limit: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    /// `None` if no default was given; `Some(None)` if the default was explicitly set to null.
    #[serde(
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Option<ColumnDefault>>,
    pub null: Option<bool>,
    pub first: Option<bool>,
    pub after: Option<String>,
    pub auto_increment: Option<bool>,
    pub primary_key: Option<bool>,
    pub collation: Option<String>,
    pub comment: Option<String>,
    /// Column compression encoding (e.g. `zstd`, `lzo`, `raw`).
    pub encoding: Option<String>,
    /// When set, an index is declared on the column as well.
    pub index: Option<IndexOptions>,
}

impl ColumnOptions {
    /// Sets the column length limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets precision and scale of a numeric column.
    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Sets the column default.
    pub fn with_default(mut self, default: impl Into<ColumnDefault>) -> Self {
        self.default = Some(Some(default.into()));
        self
    }

    /// Explicitly sets the column default to null.
    pub fn default_null(mut self) -> Self {
        self.default = Some(None);
        self
    }

    /// Returns whether a default was given, including an explicit null.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Sets whether the column accepts NULL values.
    pub fn null(mut self, null: bool) -> Self {
        self.null = Some(null);
        self
    }

    /// Places the column first in the table.
    pub fn first(mut self) -> Self {
        self.first = Some(true);
        self
    }

    /// Places the column after `column`.
    pub fn after(mut self, column: impl Into<String>) -> Self {
        self.after = Some(column.into());
        self
    }

    pub fn auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = Some(auto_increment);
        self
    }

    /// Marks the column as primary key.
    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = Some(primary_key);
        self
    }

    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the column compression encoding.
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Declares an index on the column.
    pub fn index(mut self, index: IndexOptions) -> Self {
        self.index = Some(index);
        self
    }
}

/// Maps a present key to `Some`, so that an explicit `null` becomes `Some(None)`.
///
/// Absent keys never reach this function and fall back to the field default (`None`).
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Options of a reference column declaration (`<name>_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceOptions {
    /// Type of the reference column; defaults to [`ColumnType::BigInt`].
    pub column_type: Option<ColumnType>,
    /// Whether to declare an index on the reference column.
    pub index: bool,
    pub null: Option<bool>,
}

impl Default for ReferenceOptions {
    fn default() -> Self {
        Self {
            column_type: None,
            index: true,
            null: None,
        }
    }
}

impl ReferenceOptions {
    /// Sets the type of the reference column.
    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    /// Don't declare an index on the reference column.
    pub fn without_index(mut self) -> Self {
        self.index = false;
        self
    }

    /// Sets whether the reference column accepts NULL values.
    pub fn null(mut self, null: bool) -> Self {
        self.null = Some(null);
        self
    }
}
