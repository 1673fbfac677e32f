//! Pretty printing of compiled single-line SQL.

use crate::config::FormatConfig;

/// Turns compiled single-line SQL into a readable layout.
///
/// Implementations must be pure: the same input always yields the same
/// output. Any `Fn(&str) -> String` closure is a formatter.
pub trait SqlFormatter: Send + Sync {
    fn format(&self, sql: &str) -> String;
}

impl<F> SqlFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format(&self, sql: &str) -> String {
        self(sql)
    }
}

/// Clause keywords that start a new line. Longer keywords first.
const CLAUSE_KEYWORDS: &[&str] = &[
    "LEFT JOIN",
    "RIGHT JOIN",
    "INNER JOIN",
    "CROSS JOIN",
    "JOIN",
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "ORDER BY",
    "LIMIT",
    "SET",
    "VALUES",
];

/// Breaks clauses onto their own lines and indents subqueries by
/// parenthesis depth.
///
/// ```rust
/// use sqlcraft::{KeywordFormatter, SqlFormatter};
///
/// let pretty = KeywordFormatter::new(2).format("SELECT user.id FROM user WHERE (user.id = :v1)");
/// assert_eq!(pretty, "SELECT user.id\nFROM user\nWHERE (user.id = :v1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordFormatter {
    indent: usize,
}

impl Default for KeywordFormatter {
    fn default() -> Self {
        Self::from(&FormatConfig::default())
    }
}

impl From<&FormatConfig> for KeywordFormatter {
    fn from(config: &FormatConfig) -> Self {
        Self::new(config.indent)
    }
}

impl KeywordFormatter {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    fn break_line(&self, out: &mut String, depth: usize) {
        let kept = out.trim_end_matches(' ').len();
        out.truncate(kept);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&" ".repeat(self.indent * depth));
    }
}

impl SqlFormatter for KeywordFormatter {
    fn format(&self, sql: &str) -> String {
        let mut out = String::with_capacity(sql.len() + sql.len() / 4);
        // one entry per open paren: true when it wraps a subquery
        let mut parens: Vec<bool> = Vec::new();
        let mut in_quote = false;
        let mut at_word_start = true;
        let mut rest = sql;

        while let Some(ch) = rest.chars().next() {
            if in_quote {
                out.push(ch);
                in_quote = ch != '\'';
                rest = &rest[ch.len_utf8()..];
                continue;
            }

            if at_word_start && rest.starts_with("--") {
                let end = rest.find('\n').map_or(rest.len(), |i| i + 1);
                out.push_str(&rest[..end]);
                rest = &rest[end..];
                continue;
            }

            if at_word_start
                && let Some(keyword) = CLAUSE_KEYWORDS.iter().find(|kw| starts_with_word(rest, kw))
            {
                self.break_line(&mut out, parens.len());
                out.push_str(keyword);
                rest = &rest[keyword.len()..];
                at_word_start = false;
                continue;
            }

            match ch {
                '\'' => in_quote = true,
                '(' => {
                    out.push('(');
                    rest = &rest[1..];
                    let subquery = starts_with_word(rest, "SELECT");
                    parens.push(subquery);
                    if subquery {
                        self.break_line(&mut out, parens.len());
                    }
                    at_word_start = true;
                    continue;
                }
                ')' => {
                    if parens.pop() == Some(true) {
                        self.break_line(&mut out, parens.len());
                    }
                }
                _ => {}
            }

            out.push(ch);
            at_word_start = ch.is_whitespace();
            rest = &rest[ch.len_utf8()..];
        }

        out
    }
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.starts_with(word)
        && text[word.len()..]
            .chars()
            .next()
            .is_none_or(|c| c.is_whitespace() || c == '(')
}
