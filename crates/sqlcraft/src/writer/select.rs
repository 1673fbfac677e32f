use super::Session;
use crate::error::{SqlError, SqlResult};
use crate::query::{Conjunction, Select, Where};
use crate::value::Value;

pub(super) struct SelectWriter;

impl SelectWriter {
    pub(super) fn write(&self, session: &mut Session<'_>, select: &Select) -> SqlResult<String> {
        if select.is_join() {
            return self.join(session, select);
        }

        let table = select
            .table()
            .ok_or_else(|| SqlError::missing_context("cannot compile a SELECT without a table"))?;
        let from = session.table_ref(table)?;

        let mut sql = String::from("SELECT");
        if select.is_distinct() {
            sql.push_str(" DISTINCT");
        }

        let columns = session.columns(select)?;
        if !columns.is_empty() {
            sql.push(' ');
            sql.push_str(&columns);
        }

        sql.push_str(" FROM ");
        sql.push_str(&from);

        for join in select.all_joins() {
            sql.push(' ');
            sql.push_str(&self.join(session, join)?);
        }

        if let Some(wheres) = self.combine(session, select.all_wheres())? {
            sql.push_str(" WHERE ");
            sql.push_str(&wheres);
        }

        if !select.group_by_columns().is_empty() {
            let columns: Vec<String> = select
                .group_by_columns()
                .iter()
                .map(|c| session.column_ref(c))
                .collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&columns.join(", "));
        }

        if let Some(havings) = self.combine(session, select.all_havings())? {
            sql.push_str(" HAVING ");
            sql.push_str(&havings);
        }

        let order_by = select.all_order_by();
        if !order_by.is_empty() {
            let entries: Vec<String> = order_by
                .iter()
                .map(|o| format!("{} {}", session.column_ref(o.column()), o.direction()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&entries.join(", "));
        }

        let limit = select.limit_bounds();
        if limit.is_set() {
            let start = session.bind(&Value::from(limit.start.unwrap_or(0)));
            let count = session.bind(&Value::from(limit.count.unwrap_or(0)));
            sql.push_str(&format!(" LIMIT {start}, {count}"));
        }

        Ok(sql)
    }

    /// `JOIN_TYPE table[ AS alias][ ON predicate]`
    fn join(&self, session: &mut Session<'_>, join: &Select) -> SqlResult<String> {
        let table = join
            .table()
            .ok_or_else(|| SqlError::missing_context("cannot compile a JOIN without a table"))?;
        let join_type = join.join_type().unwrap_or_default();

        let mut sql = format!("{} {}", join_type.as_str(), session.table_ref(table)?);
        let on = session.predicate(join.join_condition())?;
        if !on.is_empty() {
            sql.push_str(" ON ");
            sql.push_str(&on);
        }
        Ok(sql)
    }

    /// Join the trees collected from a select and its joins with `AND`.
    ///
    /// When more than one tree renders, trees with a conjunction other than
    /// `AND` are parenthesized so their own operator stays grouped.
    fn combine(&self, session: &mut Session<'_>, trees: Vec<&Where>) -> SqlResult<Option<String>> {
        let mut rendered = Vec::with_capacity(trees.len());
        for tree in trees {
            let sql = session.predicate(tree)?;
            if !sql.is_empty() {
                rendered.push((tree.conjunction(), sql));
            }
        }

        Ok(match rendered.len() {
            0 => None,
            1 => rendered.pop().map(|(_, sql)| sql),
            _ => Some(
                rendered
                    .into_iter()
                    .map(|(conjunction, sql)| match conjunction {
                        Conjunction::And => sql,
                        _ => format!("({sql})"),
                    })
                    .collect::<Vec<_>>()
                    .join(" AND "),
            ),
        })
    }
}
