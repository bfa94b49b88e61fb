//! This module exposes the types used to describe tables and columns before they are handed to a
//! DDL generator.

mod declaration;
mod index;
mod options;
mod types;
mod value;

pub use self::declaration::ColumnDeclaration;
pub use self::index::{
    ForeignKeyDefinition, ForeignKeyOptions, IndexDefinition, IndexOptions, ReferentialAction,
};
pub use self::options::{ColumnOptions, ReferenceOptions};
pub use self::types::ColumnType;
pub use self::value::{ColumnDefault, UUID_GENERATE_V4, Value};
