#![crate_name = "redshift_schema_api"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Redshift Schema API
//!
//! This crate exposes the generic schema-definition layer which dialect crates build upon:
//! column type tags, literal values and defaults, the options accepted by column, index and
//! foreign key declarations, and the [`schema::ColumnDeclaration`] capability shared by every
//! table-builder.

#![doc(html_playground_url = "https://play.rust-lang.org")]

mod error;
pub mod prelude;
pub mod schema;

pub use self::error::{SchemaError, SchemaResult};
