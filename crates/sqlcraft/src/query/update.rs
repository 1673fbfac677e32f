use super::single_line;
use super::where_tree::Where;
use crate::node::{Column, IntoColumn, Table};
use crate::value::Value;

/// UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    table: Table,
    comment: Option<String>,
    values: Vec<(Column, Value)>,
    where_clause: Option<Where>,
    limit: Option<u64>,
}

impl Update {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            table: table.into(),
            comment: None,
            values: Vec::new(),
            where_clause: None,
            limit: None,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn set_table(&mut self, table: impl Into<Table>) -> &mut Self {
        self.table = table.into();
        if let Some(w) = self.where_clause.as_mut() {
            w.rebind(Some(&self.table));
        }
        self
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(single_line(comment.into()));
        self
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Assign `value` to `column`. Null values are kept and render as `NULL`.
    pub fn set(&mut self, column: impl IntoColumn, value: impl Into<Value>) -> &mut Self {
        let column = column.into_column(Some(&self.table));
        let value = value.into();
        match self.values.iter_mut().find(|(c, _)| c.name() == column.name()) {
            Some(slot) => slot.1 = value,
            None => self.values.push((column, value)),
        }
        self
    }

    pub fn set_values<I, C, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoColumn,
        V: Into<Value>,
    {
        for (column, value) in values {
            self.set(column, value);
        }
        self
    }

    pub fn values(&self) -> &[(Column, Value)] {
        &self.values
    }

    pub fn where_(&mut self) -> &mut Where {
        let table = self.table.clone();
        self.where_clause
            .get_or_insert_with(|| Where::bound(Some(table)))
    }

    pub fn where_clause(&self) -> Option<&Where> {
        self.where_clause.as_ref()
    }

    /// Cap the number of affected rows.
    pub fn limit(&mut self, rows: u64) -> &mut Self {
        self.limit = Some(rows);
        self
    }

    pub fn limit_rows(&self) -> Option<u64> {
        self.limit
    }
}
