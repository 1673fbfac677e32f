use super::Session;
use crate::error::{SqlError, SqlResult};
use crate::query::Insert;

pub(super) struct InsertWriter;

impl InsertWriter {
    /// `INSERT INTO table (columns) VALUES (placeholders)`
    pub(super) fn write(&self, session: &mut Session<'_>, insert: &Insert) -> SqlResult<String> {
        if insert.values().is_empty() {
            return Err(SqlError::missing_context(format!(
                "cannot compile an INSERT into '{}' without columns",
                insert.table().name()
            )));
        }

        let table = session.table_ref(insert.table())?;
        let mut columns = Vec::with_capacity(insert.values().len());
        let mut tokens = Vec::with_capacity(insert.values().len());
        for (column, value) in insert.values() {
            columns.push(session.column_ref(column));
            tokens.push(session.bind(value));
        }

        Ok(format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            tokens.join(", ")
        ))
    }
}
