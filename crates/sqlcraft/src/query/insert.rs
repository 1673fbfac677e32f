use super::single_line;
use crate::node::{Column, IntoColumn, Table};
use crate::value::Value;

/// INSERT statement: one row of column -> value assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table: Table,
    comment: Option<String>,
    values: Vec<(Column, Value)>,
}

impl Insert {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            table: table.into(),
            comment: None,
            values: Vec::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Replace the table; columns already set keep their binding.
    pub fn set_table(&mut self, table: impl Into<Table>) -> &mut Self {
        self.table = table.into();
        self
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(single_line(comment.into()));
        self
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Assign `value` to `column`; a repeated column keeps its position and
    /// takes the new value.
    pub fn set(&mut self, column: impl IntoColumn, value: impl Into<Value>) -> &mut Self {
        let column = column.into_column(Some(&self.table));
        let value = value.into();
        match self.values.iter_mut().find(|(c, _)| c.name() == column.name()) {
            Some(slot) => slot.1 = value,
            None => self.values.push((column, value)),
        }
        self
    }

    /// Assign every `(column, value)` pair in order.
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

    /// Column list, derived from the assignments.
    pub fn columns(&self) -> Vec<&Column> {
        self.values.iter().map(|(c, _)| c).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_column_overwrites_in_place() {
        let mut insert = Insert::new("user");
        insert.set("id", 1).set("name", "a").set("id", 2);
        assert_eq!(insert.values().len(), 2);
        assert_eq!(insert.values()[0].1, Value::Int(2));
        assert_eq!(insert.columns()[1].name(), "name");
    }
}
