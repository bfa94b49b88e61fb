use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type tag of a declared column.
///
/// Tags are serialized with their snake-case name (e.g. `"primary_key"`, `"jsonb"`). Names which
/// don't match a known tag are kept verbatim as [`ColumnType::Custom`], so native types the
/// generic layer doesn't know about can still flow through to the DDL stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ColumnType {
    /// Reserved tag for an auto-generated surrogate primary key.
    PrimaryKey,
    String,
    Text,
    Integer,
    BigInt,
    Float,
    Decimal,
    Numeric,
    Datetime,
    /// Synonym of [`ColumnType::Datetime`]; resolved by [`ColumnType::aliased`].
    Timestamp,
    Time,
    Date,
    Binary,
    Boolean,
    Json,
    Jsonb,
    Uuid,
    /// Any other native type name.
    Custom(String),
}

impl ColumnType {
    /// Returns the snake-case name of the type tag.
    pub fn name(&self) -> &str {
        match self {
            Self::PrimaryKey => "primary_key",
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Datetime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Date => "date",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::Json => "json",
            Self::Jsonb => "jsonb",
            Self::Uuid => "uuid",
            Self::Custom(name) => name,
        }
    }

    /// Resolves a type synonym to its canonical tag.
    ///
    /// Column factories call this before building a column record, so synonyms can be
    /// introduced here without touching the declaration call sites.
    /// A [`ColumnType::Custom`] spelling a known tag (e.g. `Custom("uuid")`) resolves to that tag.
    pub fn aliased(self) -> Self {
        let canonical = match self {
            Self::Custom(name) => Self::from(name.as_str()),
            other => other,
        };
        match canonical {
            Self::Timestamp => Self::Datetime,
            other => other,
        }
    }

    /// Returns whether this is the reserved [`ColumnType::PrimaryKey`] tag, however spelled.
    pub fn is_primary_key(&self) -> bool {
        match self {
            Self::PrimaryKey => true,
            Self::Custom(name) => name == "primary_key",
            _ => false,
        }
    }
}

impl From<&str> for ColumnType {
    fn from(name: &str) -> Self {
        match name {
            "primary_key" => Self::PrimaryKey,
            "string" => Self::String,
            "text" => Self::Text,
            "integer" => Self::Integer,
            "bigint" => Self::BigInt,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "numeric" => Self::Numeric,
            "datetime" => Self::Datetime,
            "timestamp" => Self::Timestamp,
            "time" => Self::Time,
            "date" => Self::Date,
            "binary" => Self::Binary,
            "boolean" => Self::Boolean,
            "json" => Self::Json,
            "jsonb" => Self::Jsonb,
            "uuid" => Self::Uuid,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Custom(name) => name,
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
