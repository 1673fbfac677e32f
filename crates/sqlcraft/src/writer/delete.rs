use super::Session;
use crate::error::SqlResult;
use crate::query::Delete;
use crate::value::Value;

pub(super) struct DeleteWriter;

impl DeleteWriter {
    pub(super) fn write(&self, session: &mut Session<'_>, delete: &Delete) -> SqlResult<String> {
        let mut sql = format!("DELETE FROM {}", session.table_ref(delete.table())?);

        if let Some(tree) = delete.where_clause() {
            let predicate = session.predicate(tree)?;
            if !predicate.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&predicate);
            }
        }

        if let Some(rows) = delete.limit_rows() {
            sql.push_str(" LIMIT ");
            sql.push_str(&session.bind(&Value::from(rows)));
        }

        Ok(sql)
    }
}
