//! Builder configuration, loadable from TOML.
//!
//! ```toml
//! dialect = "mysql"
//! log_sql = true
//! max_logged_sql_length = 200
//!
//! [format]
//! indent = 4
//! ```

use crate::dialect::DialectKind;
use crate::error::{SqlError, SqlResult};
use serde::Deserialize;

/// Default truncation for logged SQL, in bytes.
pub const DEFAULT_MAX_LOGGED_SQL_LENGTH: usize = 200;

const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Identifier quoting dialect.
    pub dialect: DialectKind,
    /// Emit a `sqlcraft.sql` debug event for every top-level compile.
    pub log_sql: bool,
    /// Truncate logged SQL. `None` logs it in full.
    pub max_logged_sql_length: Option<usize>,
    pub format: FormatConfig,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            dialect: DialectKind::Generic,
            log_sql: true,
            max_logged_sql_length: Some(DEFAULT_MAX_LOGGED_SQL_LENGTH),
            format: FormatConfig::default(),
        }
    }
}

/// `[format]` table: settings for the pretty printer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> SqlResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SqlResult<()> {
        if self.format.indent == 0 || self.format.indent > MAX_INDENT {
            return Err(SqlError::Config(format!(
                "format.indent must be between 1 and {MAX_INDENT}, got {}",
                self.format.indent
            )));
        }
        Ok(())
    }

    pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_log_sql(mut self, enabled: bool) -> Self {
        self.log_sql = enabled;
        self
    }

    pub fn with_max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Log compiled SQL without truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.format.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = BuilderConfig::from_toml_str("").unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn parses_full_document() {
        let config = BuilderConfig::from_toml_str(
            r#"
            dialect = "mysql"
            log_sql = false
            max_logged_sql_length = 64

            [format]
            indent = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.dialect, DialectKind::Mysql);
        assert!(!config.log_sql);
        assert_eq!(config.max_logged_sql_length, Some(64));
        assert_eq!(config.format.indent, 2);
    }

    #[test]
    fn unknown_dialect_is_a_config_error() {
        let err = BuilderConfig::from_toml_str(r#"dialect = "oracle""#).unwrap_err();
        assert!(matches!(err, SqlError::Config(_)));
    }

    #[test]
    fn zero_indent_is_rejected() {
        let err = BuilderConfig::from_toml_str("[format]\nindent = 0").unwrap_err();
        assert!(matches!(err, SqlError::Config(_)));
    }

    #[test]
    fn setters_chain() {
        let config = BuilderConfig::new()
            .with_dialect(DialectKind::Mysql)
            .with_max_logged_sql_length(10)
            .with_indent(2);
        assert_eq!(config.dialect, DialectKind::Mysql);
        assert_eq!(config.max_logged_sql_length, Some(10));
        assert_eq!(config.no_truncate().max_logged_sql_length, None);
    }
}
