//! Top-level compile entry points.

use crate::config::BuilderConfig;
use crate::dialect::{Dialect, DialectKind, GenericDialect, MySqlDialect};
use crate::error::SqlResult;
use crate::format::{KeywordFormatter, SqlFormatter};
use crate::logging::log_compiled;
use crate::node::Table;
use crate::query::{
    Delete, Insert, Intersect, Minus, Query, Select, Statement, Union, UnionAll, Update,
};
use crate::value::Params;
use crate::writer::{PlaceholderAllocator, Session};
use std::fmt;
use std::sync::Arc;

/// Builder without identifier quoting.
pub type GenericBuilder = Builder<GenericDialect>;

/// Builder that quotes identifiers with backticks.
pub type MySqlBuilder = Builder<MySqlDialect>;

/// Compiles statements into SQL text plus bound parameters.
///
/// The dialect only affects identifier rendering. A builder holds no
/// per-compile state; [`Builder::compile`] starts every statement with a
/// fresh [`PlaceholderAllocator`].
///
/// ```rust
/// use sqlcraft::{GenericBuilder, Select};
///
/// let builder = GenericBuilder::new();
/// let mut select = Select::new("user");
/// select.set_columns(["id", "role"])?;
/// select.where_().equals("id", 7);
///
/// let compiled = builder.compile(&select)?;
/// assert_eq!(compiled.sql(), "SELECT user.id, user.role FROM user WHERE (user.id = :v1)");
/// assert_eq!(compiled.params().len(), 1);
/// # Ok::<(), sqlcraft::SqlError>(())
/// ```
#[derive(Clone)]
pub struct Builder<D: Dialect = GenericDialect> {
    dialect: D,
    config: BuilderConfig,
    formatter: Arc<dyn SqlFormatter>,
}

impl<D: Dialect + fmt::Debug> fmt::Debug for Builder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("dialect", &self.dialect)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<D: Dialect + Default> Default for Builder<D> {
    fn default() -> Self {
        Self::with_dialect(D::default())
    }
}

impl<D: Dialect + Default> Builder<D> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder<DialectKind> {
    /// Build from configuration; the dialect is chosen at runtime.
    pub fn from_config(config: BuilderConfig) -> Self {
        Self::with_dialect(config.dialect).with_config(config)
    }
}

impl<D: Dialect> Builder<D> {
    pub fn with_dialect(dialect: D) -> Self {
        let config = BuilderConfig::default();
        Self {
            dialect,
            formatter: Arc::new(KeywordFormatter::from(&config.format)),
            config,
        }
    }

    /// Replace the configuration. The pretty printer follows `[format]`
    /// unless a custom formatter is installed afterwards.
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.formatter = Arc::new(KeywordFormatter::from(&config.format));
        self.config = config;
        self
    }

    pub fn with_formatter(mut self, formatter: impl SqlFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Compile a top-level statement with fresh placeholder numbering.
    pub fn compile<Q: Query + ?Sized>(&self, statement: &Q) -> SqlResult<Compiled> {
        let mut placeholders = PlaceholderAllocator::new();
        let sql = self.compile_with(statement, &mut placeholders, false)?;
        if self.config.log_sql {
            log_compiled(
                statement.kind(),
                self.dialect.name(),
                &sql,
                placeholders.len(),
                self.config.max_logged_sql_length,
            );
        }
        Ok(Compiled {
            sql,
            params: placeholders.into_params(),
        })
    }

    /// Compile into a caller-owned allocator.
    ///
    /// With `continue_placeholders = false` the allocator is reset first;
    /// with `true` numbering carries on from its current state.
    pub fn compile_with<Q: Query + ?Sized>(
        &self,
        statement: &Q,
        placeholders: &mut PlaceholderAllocator,
        continue_placeholders: bool,
    ) -> SqlResult<String> {
        Session::new(&self.dialect, placeholders)
            .write(statement.as_statement(), continue_placeholders)
    }

    /// SQL text only.
    pub fn write<Q: Query + ?Sized>(&self, statement: &Q) -> SqlResult<String> {
        Ok(self.compile(statement)?.sql)
    }

    /// SQL text passed through the pretty printer.
    pub fn write_formatted<Q: Query + ?Sized>(&self, statement: &Q) -> SqlResult<String> {
        let compiled = self.compile(statement)?;
        Ok(self.formatter.format(compiled.sql()))
    }

    pub fn formatter(&self) -> &dyn SqlFormatter {
        self.formatter.as_ref()
    }

    // ==================== Factory shorthands ====================

    pub fn select(&self, table: impl Into<Table>) -> Select {
        Select::new(table)
    }

    pub fn insert(&self, table: impl Into<Table>) -> Insert {
        Insert::new(table)
    }

    pub fn update(&self, table: impl Into<Table>) -> Update {
        Update::new(table)
    }

    pub fn delete(&self, table: impl Into<Table>) -> Delete {
        Delete::new(table)
    }

    pub fn union(&self) -> Union {
        Union::new()
    }

    pub fn union_all(&self) -> UnionAll {
        UnionAll::new()
    }

    pub fn intersect(&self) -> Intersect {
        Intersect::new()
    }

    pub fn minus(&self, first: Select, second: Select) -> Minus {
        Minus::new(first, second)
    }
}

/// Result of a compile: SQL text and its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    sql: String,
    params: Params,
}

impl Compiled {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_parts(self) -> (String, Params) {
        (self.sql, self.params)
    }

    /// SQL text passed through `formatter`.
    pub fn formatted(&self, formatter: &dyn SqlFormatter) -> String {
        formatter.format(&self.sql)
    }
}

impl fmt::Display for Compiled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Renders with the generic dialect; a statement that fails to compile
/// prints the error message instead.
macro_rules! impl_display_via_builder {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut placeholders = PlaceholderAllocator::new();
                    match GenericBuilder::new().compile_with(self, &mut placeholders, false) {
                        Ok(sql) => f.write_str(&sql),
                        Err(err) => write!(f, "{err}"),
                    }
                }
            }
        )*
    };
}

impl_display_via_builder!(
    Select, Insert, Update, Delete, Union, UnionAll, Intersect, Minus, Statement
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_resets_between_calls() {
        let builder = GenericBuilder::new();
        let mut select = Select::new("user");
        select.where_().equals("id", 1);

        let first = builder.compile(&select).unwrap();
        let second = builder.compile(&select).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.params().tokens(), [":v1"]);
    }

    #[test]
    fn compile_with_continues_numbering() {
        let builder = GenericBuilder::new();
        let mut placeholders = PlaceholderAllocator::new();
        let mut delete = Delete::new("user");
        delete.where_().equals("id", 1);

        builder.compile_with(&delete, &mut placeholders, false).unwrap();
        let sql = builder.compile_with(&delete, &mut placeholders, true).unwrap();
        assert_eq!(sql, "DELETE FROM user WHERE (user.id = :v2)");

        let sql = builder.compile_with(&delete, &mut placeholders, false).unwrap();
        assert_eq!(sql, "DELETE FROM user WHERE (user.id = :v1)");
    }

    #[test]
    fn mysql_builder_quotes_identifiers() {
        let builder = MySqlBuilder::new();
        let select = Select::new("user");
        assert_eq!(builder.write(&select).unwrap(), "SELECT `user`.* FROM `user`");
    }

    #[test]
    fn from_config_picks_dialect() {
        let config = BuilderConfig::from_toml_str(r#"dialect = "mysql""#).unwrap();
        let builder = Builder::<DialectKind>::from_config(config);
        assert_eq!(builder.dialect().name(), "mysql");
        let insert = {
            let mut insert = builder.insert("user");
            insert.set("id", 1);
            insert
        };
        assert_eq!(
            builder.write(&insert).unwrap(),
            "INSERT INTO `user` (`user`.`id`) VALUES (:v1)"
        );
    }

    #[test]
    fn display_prints_diagnostic_on_error() {
        let insert = Insert::new("user");
        assert!(insert.to_string().starts_with("Missing context:"));

        let mut select = Select::new("user");
        select.set_columns(["id"]).unwrap();
        assert_eq!(select.to_string(), "SELECT user.id FROM user");
    }

    #[test]
    fn write_formatted_uses_configured_indent() {
        let builder = GenericBuilder::new().with_config(BuilderConfig::new().with_indent(2));
        let mut select = Select::new("user");
        select.set_columns(["id"]).unwrap();
        select.where_().equals("id", 1);
        assert_eq!(
            builder.write_formatted(&select).unwrap(),
            "SELECT user.id\nFROM user\nWHERE (user.id = :v1)"
        );
    }

    #[test]
    fn custom_formatter() {
        let builder = GenericBuilder::new().with_formatter(|sql: &str| sql.replace(' ', "_"));
        let select = Select::new("t");
        assert_eq!(builder.write_formatted(&select).unwrap(), "SELECT_t.*_FROM_t");
    }
}
