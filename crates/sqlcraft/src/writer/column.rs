use super::Session;
use crate::error::SqlResult;
use crate::node::WILDCARD;
use crate::query::Select;

/// Renders a SELECT column list.
///
/// Order: table columns, subquery columns, value columns, function columns.
/// Each group lists the select's own entries, then every join's, depth-first.
/// Count mode replaces the whole list.
pub(super) struct ColumnWriter;

impl ColumnWriter {
    pub(super) fn write(&self, session: &mut Session<'_>, select: &Select) -> SqlResult<String> {
        if let Some(count) = select.count_mode() {
            let expr = match &count.column {
                Some(column) => session.column_ref(column),
                None => WILDCARD.to_string(),
            };
            let mut sql = format!("COUNT({expr})");
            if let Some(alias) = &count.alias {
                push_alias(session, &mut sql, alias);
            }
            return Ok(sql);
        }

        let mut parts: Vec<String> = select
            .all_columns()?
            .iter()
            .map(|c| session.column_expr(c))
            .collect();

        for column in select.all_select_columns() {
            let mut sql = format!("({})", session.write_nested(&column.select)?);
            push_alias(session, &mut sql, &column.alias);
            parts.push(sql);
        }

        for column in select.all_value_columns() {
            let mut sql = session.bind(&column.value);
            push_alias(session, &mut sql, &column.alias);
            parts.push(sql);
        }

        for column in select.all_function_columns() {
            let mut sql = if column.arguments.is_empty() {
                column.function.clone()
            } else {
                format!("{}({})", column.function, column.arguments.join(", "))
            };
            push_alias(session, &mut sql, &column.alias);
            parts.push(sql);
        }

        Ok(parts.join(", "))
    }
}

fn push_alias(session: &Session<'_>, sql: &mut String, alias: &str) {
    if alias.is_empty() {
        return;
    }
    sql.push_str(" AS ");
    sql.push_str(&session.ident(alias));
}
