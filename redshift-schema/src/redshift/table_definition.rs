use redshift_schema_api::prelude::{
    ColumnDeclaration, ColumnOptions, ColumnType, ForeignKeyDefinition, ForeignKeyOptions,
    IndexDefinition, IndexOptions, SchemaError, SchemaResult,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::redshift::ColumnDefinition;

/// Schema used when none is given.
pub const DEFAULT_SCHEMA: &str = "public";
/// Sort style used when none is given.
pub const DEFAULT_SORTSTYLE: &str = "COMPOUND";
/// Distribution style used when none is given.
pub const DEFAULT_DISTSTYLE: &str = "EVEN";

/// Configuration of a [`TableDefinition`].
///
/// Every `None` resolves to the table default, whether it was omitted or explicitly set to null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDefinitionOptions {
    pub temporary: bool,
    /// Free-form table options appended to the `CREATE TABLE` statement.
    pub options: Option<String>,
    /// Query of a `CREATE TABLE ... AS` statement.
    #[serde(rename = "as")]
    pub as_query: Option<String>,
    pub comment: Option<String>,
    pub sortstyle: Option<String>,
    #[serde(deserialize_with = "deserialize_sortkey")]
    pub sortkey: Option<Vec<String>>,
    pub diststyle: Option<String>,
    pub distkey: Option<String>,
    pub schema: Option<String>,
}

impl TableDefinitionOptions {
    /// Makes the table temporary.
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Creates the table from the result of `query`.
    pub fn as_query(mut self, query: impl Into<String>) -> Self {
        self.as_query = Some(query.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the sort style (e.g. `COMPOUND`, `INTERLEAVED`).
    pub fn sortstyle(mut self, sortstyle: impl Into<String>) -> Self {
        self.sortstyle = Some(sortstyle.into());
        self
    }

    /// Sets the sort key columns.
    pub fn sortkey<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sortkey = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the distribution style (e.g. `EVEN`, `KEY`, `ALL`, `AUTO`).
    pub fn diststyle(mut self, diststyle: impl Into<String>) -> Self {
        self.diststyle = Some(diststyle.into());
        self
    }

    /// Sets the distribution key column.
    pub fn distkey(mut self, distkey: impl Into<String>) -> Self {
        self.distkey = Some(distkey.into());
        self
    }

    /// Sets the schema the table belongs to.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

/// Accepts either a single column name or a list of names.
fn deserialize_sortkey<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|sortkey| match sortkey {
            OneOrMany::One(column) => vec![column],
            OneOrMany::Many(columns) => columns,
        }),
    )
}

/// Describes a Redshift table being created.
///
/// Besides the columns, indexes and foreign keys, the definition carries the physical layout of
/// the table: schema, sort style and key, distribution style and key. Sort and distribution keys
/// are kept verbatim and not checked against the declared columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    name: String,
    temporary: bool,
    options: Option<String>,
    #[serde(rename = "as")]
    as_query: Option<String>,
    schema: String,
    comment: Option<String>,
    sortstyle: String,
    sortkey: Option<Vec<String>>,
    diststyle: String,
    distkey: Option<String>,
    columns: Vec<ColumnDefinition>,
    indexes: Vec<IndexDefinition>,
    foreign_keys: Vec<ForeignKeyDefinition>,
    primary_keys: Option<Vec<String>>,
}

impl TableDefinition {
    /// Creates the definition of table `name` with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, TableDefinitionOptions::default())
    }

    /// Creates the definition of table `name`.
    pub fn with_options(name: impl Into<String>, options: TableDefinitionOptions) -> Self {
        Self {
            name: name.into(),
            temporary: options.temporary,
            options: options.options,
            as_query: options.as_query,
            schema: options
                .schema
                .unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
            comment: options.comment,
            sortstyle: options
                .sortstyle
                .unwrap_or_else(|| DEFAULT_SORTSTYLE.to_string()),
            sortkey: options.sortkey,
            diststyle: options
                .diststyle
                .unwrap_or_else(|| DEFAULT_DISTSTYLE.to_string()),
            distkey: options.distkey,
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            primary_keys: None,
        }
    }

    /// Builds the column record for a declaration.
    ///
    /// Type synonyms are resolved first; option keys the record has no field for are ignored.
    /// The column is flagged as primary key when its type is [`ColumnType::PrimaryKey`] or
    /// `options.primary_key` is set.
    pub fn new_column_definition(
        name: &str,
        column_type: ColumnType,
        options: ColumnOptions,
    ) -> ColumnDefinition {
        let column_type = column_type.aliased();
        trace!(column = name, %column_type, "building column definition");

        let mut column = ColumnDefinition::new(name, column_type);
        column.limit = options.limit;
        column.precision = options.precision;
        column.scale = options.scale;
        column.default = options.default.flatten();
        column.null = options.null;
        column.first = options.first;
        column.after = options.after;
        column.auto_increment = options.auto_increment;
        column.primary_key =
            column.column_type.is_primary_key() || options.primary_key.unwrap_or_default();
        column.collation = options.collation;
        column.comment = options.comment;
        column.encode = options.encoding;
        column
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn temporary(&self) -> bool {
        self.temporary
    }

    pub fn options(&self) -> Option<&str> {
        self.options.as_deref()
    }

    pub fn as_query(&self) -> Option<&str> {
        self.as_query.as_deref()
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn sortstyle(&self) -> &str {
        &self.sortstyle
    }

    pub fn sortkey(&self) -> Option<&[String]> {
        self.sortkey.as_deref()
    }

    pub fn diststyle(&self) -> &str {
        &self.diststyle
    }

    pub fn distkey(&self) -> Option<&str> {
        self.distkey.as_deref()
    }

    /// Returns the declared columns, in declaration order.
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Returns the column named `name`, if declared.
    pub fn column_definition(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn indexes(&self) -> &[IndexDefinition] {
        &self.indexes
    }

    pub fn foreign_keys(&self) -> &[ForeignKeyDefinition] {
        &self.foreign_keys
    }

    /// Returns the explicit primary key column list, if one was set.
    pub fn primary_keys(&self) -> Option<&[String]> {
        self.primary_keys.as_deref()
    }

    /// Returns the primary key columns: the explicit list if set, otherwise the declared
    /// primary key columns.
    pub fn primary_key_columns(&self) -> Vec<&str> {
        match &self.primary_keys {
            Some(columns) => columns.iter().map(String::as_str).collect(),
            None => self
                .columns
                .iter()
                .filter(|column| column.is_primary_key())
                .map(|column| column.name.as_str())
                .collect(),
        }
    }

    /// Sets a composite primary key.
    pub fn set_primary_keys<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keys = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Declares an index on `columns`.
    pub fn index<I, S>(&mut self, columns: I, options: IndexOptions) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        let index = IndexDefinition::new(self.name.as_str(), columns, options);
        debug!(table = %self.name, index = %index.name, "declaring index");
        self.indexes.push(index);
        self
    }

    /// Declares a foreign key referencing `to_table`.
    pub fn foreign_key(&mut self, to_table: &str, options: ForeignKeyOptions) -> &mut Self {
        let foreign_key = ForeignKeyDefinition::new(self.name.as_str(), to_table, options);
        debug!(table = %self.name, foreign_key = %foreign_key.name, "declaring foreign key");
        self.foreign_keys.push(foreign_key);
        self
    }

    /// Removes the column named `name` and returns its definition.
    pub fn remove_column(&mut self, name: &str) -> SchemaResult<ColumnDefinition> {
        let position = self
            .columns
            .iter()
            .position(|column| column.name == name)
            .ok_or_else(|| SchemaError::UnknownColumn {
                table: self.name.clone(),
                column: name.to_string(),
            })?;
        Ok(self.columns.remove(position))
    }
}

impl ColumnDeclaration for TableDefinition {
    fn has_column(&self, name: &str) -> bool {
        self.column_definition(name).is_some()
    }

    fn column(
        &mut self,
        name: &str,
        column_type: ColumnType,
        mut options: ColumnOptions,
    ) -> SchemaResult<&mut Self> {
        if let Some(existing) = self.column_definition(name) {
            let (table, column) = (self.name.clone(), name.to_string());
            return Err(if existing.is_primary_key() {
                SchemaError::PrimaryKeyRedefinition { table, column }
            } else {
                SchemaError::DuplicateColumn { table, column }
            });
        }

        let index = options.index.take();
        let column = Self::new_column_definition(name, column_type, options);
        debug!(
            table = %self.name,
            column = %column.name,
            column_type = %column.column_type,
            primary_key = column.is_primary_key(),
            "declaring column"
        );
        self.columns.push(column);

        if let Some(index) = index {
            self.index([name], index);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {

    use redshift_schema_api::prelude::{ColumnDefault, ReferenceOptions, Value};

    use super::*;
    use crate::tests::events_table;

    #[test]
    fn test_should_apply_table_defaults() {
        let table = TableDefinition::new("events");
        assert_eq!(table.name(), "events");
        assert_eq!(table.schema(), "public");
        assert_eq!(table.sortstyle(), "COMPOUND");
        assert_eq!(table.diststyle(), "EVEN");
        assert!(table.sortkey().is_none());
        assert!(table.distkey().is_none());
        assert!(!table.temporary());
        assert!(table.columns().is_empty());
        assert!(table.indexes().is_empty());
        assert!(table.foreign_keys().is_empty());
        assert!(table.primary_keys().is_none());
    }

    #[test]
    fn test_should_apply_defaults_on_explicit_null() {
        let options = TableDefinitionOptions {
            schema: None,
            sortstyle: None,
            diststyle: None,
            ..Default::default()
        };
        let table = TableDefinition::with_options("events", options);
        assert_eq!(table.schema(), DEFAULT_SCHEMA);
        assert_eq!(table.sortstyle(), DEFAULT_SORTSTYLE);
        assert_eq!(table.diststyle(), DEFAULT_DISTSTYLE);
    }

    #[test]
    fn test_should_preserve_given_layout() {
        let table = TableDefinition::with_options(
            "page_views",
            TableDefinitionOptions::default()
                .schema("analytics")
                .sortstyle("INTERLEAVED")
                .sortkey(["viewed_at", "user_id"])
                .diststyle("KEY")
                .distkey("user_id")
                .comment("raw page views")
                .temporary(),
        );
        assert_eq!(table.schema(), "analytics");
        assert_eq!(table.sortstyle(), "INTERLEAVED");
        assert_eq!(
            table.sortkey(),
            Some(&["viewed_at".to_string(), "user_id".to_string()][..])
        );
        assert_eq!(table.diststyle(), "KEY");
        assert_eq!(table.distkey(), Some("user_id"));
        assert_eq!(table.comment(), Some("raw page views"));
        assert!(table.temporary());
    }

    #[test]
    fn test_should_preserve_unusual_styles_verbatim() {
        let table = TableDefinition::with_options(
            "events",
            TableDefinitionOptions::default()
                .diststyle("auto")
                .sortstyle("compound"),
        );
        assert_eq!(table.diststyle(), "auto");
        assert_eq!(table.sortstyle(), "compound");
    }

    #[test]
    fn test_should_build_events_table() {
        let table = events_table();
        assert_eq!(table.schema(), "public");
        assert_eq!(table.sortstyle(), "COMPOUND");
        assert_eq!(table.diststyle(), "EVEN");
        assert_eq!(table.distkey(), Some("user_id"));
        assert_eq!(table.sortkey(), Some(&["created_at".to_string()][..]));
    }

    #[test]
    fn test_should_not_validate_keys_against_columns() {
        let mut table = events_table();
        table
            .integer("other", ColumnOptions::default())
            .unwrap();
        assert!(table.column_definition("user_id").is_none());
        assert_eq!(table.distkey(), Some("user_id"));
    }

    #[test]
    fn test_should_keep_create_as_query() {
        let table = TableDefinition::with_options(
            "recent_events",
            TableDefinitionOptions::default()
                .as_query("SELECT * FROM events WHERE created_at > getdate() - 7")
                .options("BACKUP NO"),
        );
        assert_eq!(
            table.as_query(),
            Some("SELECT * FROM events WHERE created_at > getdate() - 7")
        );
        assert_eq!(table.options(), Some("BACKUP NO"));
    }

    #[test]
    fn test_should_build_column_definition_from_options() {
        let column = TableDefinition::new_column_definition(
            "amount",
            ColumnType::Decimal,
            ColumnOptions::default()
                .precision(12, 2)
                .null(false)
                .with_default(ColumnDefault::literal(0i64))
                .after("currency")
                .collation("case_insensitive")
                .comment("total amount")
                .encoding("az64")
                .auto_increment(false),
        );
        assert_eq!(column.name, "amount");
        assert_eq!(column.column_type, ColumnType::Decimal);
        assert_eq!(column.precision, Some(12));
        assert_eq!(column.scale, Some(2));
        assert_eq!(column.null, Some(false));
        assert_eq!(
            column.default,
            Some(ColumnDefault::Literal(Value::Integer(0)))
        );
        assert_eq!(column.after.as_deref(), Some("currency"));
        assert_eq!(column.collation.as_deref(), Some("case_insensitive"));
        assert_eq!(column.comment.as_deref(), Some("total amount"));
        assert_eq!(column.encode.as_deref(), Some("az64"));
        assert_eq!(column.auto_increment, Some(false));
        assert!(column.sql_type.is_none());
        assert!(!column.primary_key);
    }

    #[test]
    fn test_should_resolve_type_alias_in_factory() {
        let column = TableDefinition::new_column_definition(
            "seen_at",
            ColumnType::Timestamp,
            ColumnOptions::default(),
        );
        assert_eq!(column.column_type, ColumnType::Datetime);
    }

    #[test]
    fn test_should_flag_primary_key_from_type() {
        let column = TableDefinition::new_column_definition(
            "id",
            ColumnType::PrimaryKey,
            ColumnOptions::default(),
        );
        assert!(column.primary_key);
        assert!(column.is_primary_key());
    }

    #[test]
    fn test_should_flag_custom_spelled_primary_key_type() {
        let column = TableDefinition::new_column_definition(
            "id",
            ColumnType::Custom("primary_key".to_string()),
            ColumnOptions::default(),
        );
        assert_eq!(column.column_type, ColumnType::PrimaryKey);
        assert!(column.is_primary_key());

        let json = serde_json::to_string(&column).unwrap();
        let decoded: ColumnDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, column);
        assert!(decoded.is_primary_key());
    }

    #[test]
    fn test_should_flag_primary_key_from_options() {
        let column = TableDefinition::new_column_definition(
            "code",
            ColumnType::String,
            ColumnOptions::default().primary_key(true),
        );
        assert!(column.primary_key);

        let column = TableDefinition::new_column_definition(
            "code",
            ColumnType::String,
            ColumnOptions::default().primary_key(false),
        );
        assert!(!column.primary_key);
    }

    #[test]
    fn test_should_keep_declaration_order() {
        let mut table = TableDefinition::new("users");
        table
            .string("name", ColumnOptions::default())
            .unwrap()
            .string("email", ColumnOptions::default())
            .unwrap()
            .timestamps(ColumnOptions::default())
            .unwrap();

        let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "created_at", "updated_at"]);
    }

    #[test]
    fn test_should_reject_duplicate_column() {
        let mut table = TableDefinition::new("users");
        table.string("email", ColumnOptions::default()).unwrap();

        let err = table.text("email", ColumnOptions::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateColumn {
                table: "users".to_string(),
                column: "email".to_string(),
            }
        );
        assert_eq!(table.columns().len(), 1);
    }

    #[test]
    fn test_should_leave_table_untouched_when_timestamps_clash() {
        let mut table = TableDefinition::new("users");
        table.datetime("updated_at", ColumnOptions::default()).unwrap();

        let err = table.timestamps(ColumnOptions::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateColumn {
                table: "users".to_string(),
                column: "updated_at".to_string(),
            }
        );
        let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["updated_at"]);
    }

    #[test]
    fn test_should_reject_primary_key_redefinition() {
        let mut table = TableDefinition::new("users");
        table
            .generic_primary_key("id", ColumnType::PrimaryKey, ColumnOptions::default())
            .unwrap();

        let err = table.integer("id", ColumnOptions::default()).unwrap_err();
        assert!(matches!(err, SchemaError::PrimaryKeyRedefinition { .. }));
    }

    #[test]
    fn test_should_declare_index_from_column_options() {
        let mut table = TableDefinition::new("users");
        table
            .string("email", ColumnOptions::default().index(IndexOptions::default().unique()))
            .unwrap();

        assert_eq!(table.indexes().len(), 1);
        let index = &table.indexes()[0];
        assert_eq!(index.name, "index_users_on_email");
        assert_eq!(index.columns, vec!["email".to_string()]);
        assert!(index.unique);
    }

    #[test]
    fn test_should_declare_reference_with_index() {
        let mut table = TableDefinition::new("posts");
        table.references("user", ReferenceOptions::default()).unwrap();

        let column = table.column_definition("user_id").unwrap();
        assert_eq!(column.column_type, ColumnType::BigInt);
        assert_eq!(table.indexes()[0].name, "index_posts_on_user_id");
    }

    #[test]
    fn test_should_declare_indexes_and_foreign_keys() {
        let mut table = TableDefinition::new("posts");
        table
            .index(["user_id", "created_at"], IndexOptions::default())
            .foreign_key("users", ForeignKeyOptions::default());

        assert_eq!(
            table.indexes()[0].name,
            "index_posts_on_user_id_and_created_at"
        );
        let fk = &table.foreign_keys()[0];
        assert_eq!(fk.from_table, "posts");
        assert_eq!(fk.to_table, "users");
        assert_eq!(fk.column, "user_id");
    }

    #[test]
    fn test_should_resolve_primary_key_columns() {
        let mut table = TableDefinition::new("memberships");
        table
            .generic_primary_key("id", ColumnType::PrimaryKey, ColumnOptions::default())
            .unwrap()
            .integer("user_id", ColumnOptions::default())
            .unwrap();
        assert_eq!(table.primary_key_columns(), vec!["id"]);

        table.set_primary_keys(["user_id", "group_id"]);
        assert_eq!(table.primary_key_columns(), vec!["user_id", "group_id"]);
    }

    #[test]
    fn test_should_remove_column() {
        let mut table = TableDefinition::new("users");
        table.string("nickname", ColumnOptions::default()).unwrap();

        let removed = table.remove_column("nickname").unwrap();
        assert_eq!(removed.name, "nickname");
        assert!(table.columns().is_empty());

        let err = table.remove_column("nickname").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownColumn { .. }));
    }

    #[test]
    fn test_should_deserialize_table_options() {
        let options: TableDefinitionOptions = serde_json::from_str(
            r#"{"distkey": "user_id", "sortkey": "created_at", "schema": null, "unknown": 1}"#,
        )
        .unwrap();
        let table = TableDefinition::with_options("events", options);
        assert_eq!(table.schema(), "public");
        assert_eq!(table.distkey(), Some("user_id"));
        assert_eq!(table.sortkey(), Some(&["created_at".to_string()][..]));

        let options: TableDefinitionOptions =
            serde_json::from_str(r#"{"sortkey": ["a", "b"], "sortstyle": "INTERLEAVED"}"#)
                .unwrap();
        assert_eq!(
            options.sortkey,
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(options.sortstyle.as_deref(), Some("INTERLEAVED"));
    }

    #[test]
    fn test_should_serialize_table_definition() {
        let mut table = events_table();
        table.string("name", ColumnOptions::default()).unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["name"], "events");
        assert_eq!(json["diststyle"], "EVEN");
        assert_eq!(json["columns"][0]["name"], "name");
        assert_eq!(json["columns"][0]["column_type"], "string");
    }
}
