//! Identifier quoting hook.
//!
//! A dialect only changes how identifier text (table, column, alias) is
//! emitted; the statement model and placeholder numbering are unaffected.

use serde::Deserialize;

/// Identifier rendering strategy.
pub trait Dialect: Send + Sync {
    fn name(&self) -> &'static str;

    /// Quote character wrapped around identifiers, if any.
    fn quote_char(&self) -> Option<char> {
        None
    }

    /// Render a single identifier segment.
    ///
    /// With a quote character set, embedded quote characters are doubled.
    fn quote_identifier(&self, ident: &str) -> String {
        let Some(quote) = self.quote_char() else {
            return ident.to_string();
        };
        let mut out = String::with_capacity(ident.len() + 2);
        out.push(quote);
        for ch in ident.chars() {
            if ch == quote {
                out.push(quote);
            }
            out.push(ch);
        }
        out.push(quote);
        out
    }
}

/// Identity quoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

/// MySQL: identifiers wrapped in backticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_char(&self) -> Option<char> {
        Some('`')
    }
}

/// Dialect chosen at runtime, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectKind {
    #[default]
    Generic,
    #[serde(alias = "my_sql")]
    Mysql,
}

impl Dialect for DialectKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Generic => GenericDialect.name(),
            Self::Mysql => MySqlDialect.name(),
        }
    }

    fn quote_char(&self) -> Option<char> {
        match self {
            Self::Generic => GenericDialect.quote_char(),
            Self::Mysql => MySqlDialect.quote_char(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_is_identity() {
        assert_eq!(GenericDialect.quote_identifier("user"), "user");
    }

    #[test]
    fn mysql_uses_backticks() {
        assert_eq!(MySqlDialect.quote_identifier("user"), "`user`");
        assert_eq!(MySqlDialect.quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn kind_delegates() {
        assert_eq!(DialectKind::Mysql.quote_identifier("id"), "`id`");
        assert_eq!(DialectKind::Generic.quote_identifier("id"), "id");
        assert_eq!(DialectKind::Mysql.name(), "mysql");
    }
}
