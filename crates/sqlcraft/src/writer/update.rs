use super::Session;
use crate::error::{SqlError, SqlResult};
use crate::query::Update;
use crate::value::Value;

pub(super) struct UpdateWriter;

impl UpdateWriter {
    pub(super) fn write(&self, session: &mut Session<'_>, update: &Update) -> SqlResult<String> {
        if update.values().is_empty() {
            return Err(SqlError::missing_context(format!(
                "cannot compile an UPDATE of '{}' without values",
                update.table().name()
            )));
        }

        let table = session.table_ref(update.table())?;
        let mut assignments = Vec::with_capacity(update.values().len());
        for (column, value) in update.values() {
            let column = session.column_ref(column);
            let token = session.bind(value);
            assignments.push(format!("{column} = {token}"));
        }

        let mut sql = format!("UPDATE {table} SET {}", assignments.join(", "));

        if let Some(tree) = update.where_clause() {
            let predicate = session.predicate(tree)?;
            if !predicate.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&predicate);
            }
        }

        if let Some(rows) = update.limit_rows() {
            sql.push_str(" LIMIT ");
            sql.push_str(&session.bind(&Value::from(rows)));
        }

        Ok(sql)
    }
}
