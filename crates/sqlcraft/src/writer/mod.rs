//! Statement writers: render the model into SQL text.
//!
//! A [`Session`] carries the dialect and the placeholder allocator through
//! one compile. Every nested SELECT (join body, subquery column, predicate
//! operand, EXISTS body, set-operation member) is written through the same
//! session with `continue_placeholders = true`.

mod column;
mod delete;
mod insert;
pub mod placeholder;
mod predicate;
mod select;
mod set_op;
mod update;


pub use placeholder::{PLACEHOLDER_PREFIX, PlaceholderAllocator};

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::node::{Column, Table, WILDCARD};
use crate::query::{Select, StatementRef, Where};
use crate::value::Value;

use column::ColumnWriter;
use delete::DeleteWriter;
use insert::InsertWriter;
use predicate::PredicateWriter;
use select::SelectWriter;
use set_op::SetOpWriter;
use update::UpdateWriter;

/// State of a single compile: dialect plus the allocator being filled.
pub(crate) struct Session<'a> {
    dialect: &'a dyn Dialect,
    placeholders: &'a mut PlaceholderAllocator,
}

impl<'a> Session<'a> {
    pub(crate) fn new(dialect: &'a dyn Dialect, placeholders: &'a mut PlaceholderAllocator) -> Self {
        Self {
            dialect,
            placeholders,
        }
    }

    /// Write any statement.
    ///
    /// With `continue_placeholders = false` the allocator is reset first;
    /// nested writes always continue.
    pub(crate) fn write(
        &mut self,
        statement: StatementRef<'_>,
        continue_placeholders: bool,
    ) -> SqlResult<String> {
        if !continue_placeholders {
            self.placeholders.reset();
        }

        let (body, comment) = match statement {
            StatementRef::Select(s) => (SelectWriter.write(self, s)?, s.comment()),
            StatementRef::Insert(s) => (InsertWriter.write(self, s)?, s.comment()),
            StatementRef::Update(s) => (UpdateWriter.write(self, s)?, s.comment()),
            StatementRef::Delete(s) => (DeleteWriter.write(self, s)?, s.comment()),
            StatementRef::Union(s) => (
                SetOpWriter.write(self, statement.kind(), s.selects())?,
                s.comment(),
            ),
            StatementRef::UnionAll(s) => (
                SetOpWriter.write(self, statement.kind(), s.selects())?,
                s.comment(),
            ),
            StatementRef::Intersect(s) => (
                SetOpWriter.write(self, statement.kind(), s.selects())?,
                s.comment(),
            ),
            StatementRef::Minus(s) => (
                SetOpWriter.write(self, statement.kind(), [s.first(), s.second()])?,
                s.comment(),
            ),
        };

        Ok(match comment {
            Some(comment) => format!("-- {comment}\n{body}"),
            None => body,
        })
    }

    /// Write a SELECT nested inside the statement being compiled.
    pub(crate) fn write_nested(&mut self, select: &Select) -> SqlResult<String> {
        self.write(StatementRef::Select(select), true)
    }

    /// Bind a value and return its placeholder token.
    pub(crate) fn bind(&mut self, value: &Value) -> String {
        self.placeholders.add(value)
    }

    /// Quote one identifier segment; the wildcard and expressions are kept.
    pub(crate) fn ident(&self, ident: &str) -> String {
        if ident == WILDCARD || ident.contains('(') {
            return ident.to_string();
        }
        self.dialect.quote_identifier(ident)
    }

    /// Quote a possibly dotted identifier segment by segment.
    pub(crate) fn dotted(&self, ident: &str) -> String {
        if ident.contains('(') {
            return ident.to_string();
        }
        ident
            .split('.')
            .map(|part| self.ident(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// `schema.name[ AS alias]`; a table without a name cannot be rendered.
    pub(crate) fn table_ref(&self, table: &Table) -> SqlResult<String> {
        if table.name().is_empty() {
            return Err(SqlError::missing_context("table name must not be empty"));
        }
        let mut sql = self.dotted(&table.full_name());
        if let Some(alias) = table.alias() {
            sql.push_str(" AS ");
            sql.push_str(&self.ident(alias));
        }
        Ok(sql)
    }

    /// `qualifier.column`, unqualified for unbound columns.
    pub(crate) fn column_ref(&self, column: &Column) -> String {
        match column.table() {
            Some(table) => format!("{}.{}", self.dotted(&table.qualifier()), self.ident(column.name())),
            None => self.ident(column.name()),
        }
    }

    /// `qualifier.column[ AS alias]`; the wildcard never carries an alias.
    pub(crate) fn column_expr(&self, column: &Column) -> String {
        let mut sql = self.column_ref(column);
        if !column.is_wildcard()
            && let Some(alias) = column.alias()
        {
            sql.push_str(" AS ");
            sql.push_str(&self.ident(alias));
        }
        sql
    }

    pub(crate) fn columns(&mut self, select: &Select) -> SqlResult<String> {
        ColumnWriter.write(self, select)
    }

    pub(crate) fn predicate(&mut self, tree: &Where) -> SqlResult<String> {
        PredicateWriter.write(self, tree)
    }
}
