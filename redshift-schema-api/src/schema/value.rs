use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The UUID generation function used as default for UUID primary keys.
///
/// It comes from the `uuid-ossp` extension, which must be enabled on the database.
pub const UUID_GENERATE_V4: &str = "uuid_generate_v4()";

/// A typed literal, used as column default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    Text(String),
    Uuid(Uuid),
}

// macro rules for implementing From trait for Value enum variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }
    };
}

impl_conv_for_value!(Boolean, bool, as_boolean);
impl_conv_for_value!(Integer, i64, as_integer);
impl_conv_for_value!(Decimal, Decimal, as_decimal);
impl_conv_for_value!(Text, String, as_text);
impl_conv_for_value!(Uuid, Uuid, as_uuid);

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

/// Default of a column.
///
/// Either a typed [`Value`] or a raw SQL expression, such as a function call, which the DDL
/// stage emits unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDefault {
    Literal(Value),
    Expression(String),
}

impl ColumnDefault {
    /// Creates a literal default.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a raw expression default.
    pub fn expression(expression: impl Into<String>) -> Self {
        Self::Expression(expression.into())
    }

    /// The `uuid_generate_v4()` expression.
    pub fn uuid_generate_v4() -> Self {
        Self::expression(UUID_GENERATE_V4)
    }

    /// Returns the literal value, if this is a literal default.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Expression(_) => None,
        }
    }

    /// Returns the raw expression, if this is an expression default.
    pub fn as_expression(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Expression(expression) => Some(expression),
        }
    }
}

impl From<Value> for ColumnDefault {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}
