use super::single_line;
use super::where_tree::Where;
use crate::node::Table;

/// DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: Table,
    comment: Option<String>,
    where_clause: Option<Where>,
    limit: Option<u64>,
}

impl Delete {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            table: table.into(),
            comment: None,
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

    pub fn where_(&mut self) -> &mut Where {
        let table = self.table.clone();
        self.where_clause
            .get_or_insert_with(|| Where::bound(Some(table)))
    }

    pub fn where_clause(&self) -> Option<&Where> {
        self.where_clause.as_ref()
    }

    pub fn limit(&mut self, rows: u64) -> &mut Self {
        self.limit = Some(rows);
        self
    }

    pub fn limit_rows(&self) -> Option<u64> {
        self.limit
    }
}
