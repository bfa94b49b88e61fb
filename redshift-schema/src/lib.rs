#![crate_name = "redshift_schema"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Redshift Schema
//!
//! Table and column definitions for Amazon Redshift.
//!
//! A [`prelude::TableDefinition`] describes a table before it is handed to a DDL generator: its
//! columns, indexes and foreign keys, plus the Redshift physical layout (schema, sort style and
//! key, distribution style and key). Columns may carry an `ENCODE` hint, and
//! [`prelude::ColumnMethods`] adds JSON/JSONB columns and UUID primary keys to any table-builder.
//!
//! ```rust
//! use redshift_schema::prelude::*;
//!
//! let mut events = TableDefinition::with_options(
//!     "events",
//!     TableDefinitionOptions::default()
//!         .distkey("user_id")
//!         .sortkey(["created_at"]),
//! );
//! events
//!     .primary_key("id", ColumnType::Uuid, ColumnOptions::default())
//!     .unwrap()
//!     .bigint("user_id", ColumnOptions::default().encoding("az64"))
//!     .unwrap()
//!     .jsonb("payload", ColumnOptions::default())
//!     .unwrap()
//!     .timestamps(ColumnOptions::default())
//!     .unwrap();
//!
//! assert_eq!(events.diststyle(), "EVEN");
//! assert_eq!(events.primary_key_columns(), vec!["id"]);
//! ```
//!
//! Existing tables are altered through a [`prelude::Table`] handle, which forwards declarations
//! to a [`prelude::SchemaStatements`] implementation such as [`prelude::SchemaChangeset`].

#![doc(html_playground_url = "https://play.rust-lang.org")]

pub mod prelude;
pub mod redshift;
