use super::Session;
use crate::error::SqlResult;
use crate::query::{
    BetweenClause, ComparisonClause, InClause, MatchClause, MatchMode, Operand, Where,
};
use crate::value::Value;

/// Renders a predicate tree.
///
/// Clause kinds are emitted in a fixed order (matches, IN, BETWEEN,
/// comparisons, NULL checks, bit checks, EXISTS, literals, sub-trees) and
/// joined with the tree's conjunction. An empty tree renders as "".
pub(super) struct PredicateWriter;

impl PredicateWriter {
    pub(super) fn write(&self, session: &mut Session<'_>, tree: &Where) -> SqlResult<String> {
        let mut parts = Vec::new();

        for clause in tree.match_clauses() {
            parts.push(self.match_clause(session, clause));
        }

        for clause in tree.ins() {
            if let Some(sql) = self.in_clause(session, clause) {
                parts.push(sql);
            }
        }

        for clause in tree.betweens() {
            parts.push(self.between(session, clause));
        }

        for clause in tree.comparisons() {
            parts.push(self.comparison(session, clause)?);
        }

        for clause in tree.null_checks() {
            let not = if clause.negated { "NOT " } else { "" };
            parts.push(format!("({} IS {not}NULL)", session.column_ref(&clause.subject)));
        }

        for clause in tree.bit_clauses() {
            let subject = session.column_ref(&clause.subject);
            let token = session.bind(&clause.value);
            parts.push(format!("(ISNULL({subject}, 0) = {token})"));
        }

        for clause in tree.exists_clauses() {
            let not = if clause.negated { "NOT " } else { "" };
            let sub = session.write_nested(&clause.select)?;
            parts.push(format!("{not}EXISTS ({sub})"));
        }

        parts.extend(tree.literals().iter().cloned());

        for sub in tree.sub_trees() {
            let sql = self.write(session, sub)?;
            if !sql.is_empty() {
                parts.push(format!("({sql})"));
            }
        }

        Ok(parts.join(&format!(" {} ", tree.conjunction())))
    }

    fn comparison(&self, session: &mut Session<'_>, clause: &ComparisonClause) -> SqlResult<String> {
        let subject = session.column_ref(&clause.subject);
        let target = match &clause.target {
            Operand::Value(value) => session.bind(value),
            Operand::Column(column) => session.column_ref(column),
            Operand::Select(select) => format!("({})", session.write_nested(select)?),
        };
        Ok(format!("({subject} {} {target})", clause.operator.as_str()))
    }

    fn between(&self, session: &mut Session<'_>, clause: &BetweenClause) -> String {
        let subject = session.column_ref(&clause.subject);
        let not = if clause.negated { "NOT " } else { "" };
        let low = session.bind(&clause.low);
        let high = session.bind(&clause.high);
        format!("({subject} {not}BETWEEN {low} AND {high})")
    }

    /// An empty IN list matches nothing; an empty NOT IN list is dropped.
    fn in_clause(&self, session: &mut Session<'_>, clause: &InClause) -> Option<String> {
        if clause.values.is_empty() {
            return (!clause.negated).then(|| "(1 = 0)".to_string());
        }
        let subject = session.column_ref(&clause.subject);
        let tokens: Vec<String> = clause.values.iter().map(|v| session.bind(v)).collect();
        let not = if clause.negated { "NOT " } else { "" };
        Some(format!("({subject} {not}IN ({}))", tokens.join(", ")))
    }

    /// Several search values are joined with spaces into one search string.
    fn match_clause(&self, session: &mut Session<'_>, clause: &MatchClause) -> String {
        let columns: Vec<String> = clause.columns.iter().map(|c| session.column_ref(c)).collect();
        let search = match clause.values.as_slice() {
            [single] => single.clone(),
            values => Value::Text(
                values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        };
        let token = session.bind(&search);
        let modifier = match clause.mode {
            MatchMode::Natural => "",
            MatchMode::Boolean => " IN BOOLEAN MODE",
            MatchMode::QueryExpansion => " WITH QUERY EXPANSION",
        };
        format!("(MATCH({}) AGAINST({token}{modifier}))", columns.join(", "))
    }
}
