//! Tracing events emitted by the builder.
//!
//! Targets:
//! - `sqlcraft.sql`: one `debug` event per top-level compile.
//! - `sqlcraft.builder`: `trace` events while assembling statements.

use crate::query::QueryKind;

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// Truncate for display; `None` keeps the full text.
pub(crate) fn truncate_sql(sql: &str, max_bytes: Option<usize>) -> String {
    match max_bytes {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

pub(crate) fn log_compiled(
    kind: QueryKind,
    dialect: &str,
    sql: &str,
    param_count: usize,
    max_sql_length: Option<usize>,
) {
    if !tracing::enabled!(target: "sqlcraft.sql", tracing::Level::DEBUG) {
        return;
    }
    let sql = truncate_sql(sql, max_sql_length);
    tracing::debug!(
        target: "sqlcraft.sql",
        kind = %kind,
        dialect,
        param_count,
        sql = %sql,
        "compiled statement"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sql_is_untouched() {
        assert_eq!(truncate_sql("SELECT 1", Some(20)), "SELECT 1");
        assert_eq!(truncate_sql("SELECT 1", None), "SELECT 1");
    }

    #[test]
    fn long_sql_is_cut() {
        assert_eq!(truncate_sql("SELECT user.id FROM user", Some(6)), "SELECT...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes; cutting at 2 would split it
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }
}
