//! Error types for sqlcraft

use crate::query::QueryKind;
use thiserror::Error;

/// Result type alias for sqlcraft operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Validation failures raised while building or compiling a statement.
///
/// Nothing here is recoverable mid-compile: the caller fixes the tree and
/// compiles again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Conjunction outside `AND`, `OR`, `AND NOT`, `OR NOT`
    #[error("Invalid conjunction: '{0}' (expected AND, OR, AND NOT or OR NOT)")]
    InvalidConjunction(String),

    /// Table/predicate access on a statement that has neither
    #[error("Unsupported operation: {kind} has no {operation}")]
    UnsupportedOperation {
        kind: QueryKind,
        operation: &'static str,
    },

    /// Required table, columns or values are missing
    #[error("Missing context: {0}")]
    MissingContext(String),

    /// ORDER BY direction outside `ASC`/`DESC`
    #[error("Invalid order direction: '{0}' (expected ASC or DESC)")]
    InvalidDirection(String),

    /// Alias set on the wildcard column
    #[error("Invalid alias '{alias}' for column '{column}': wildcard columns cannot be aliased")]
    InvalidAlias { column: String, alias: String },

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create a missing context error
    pub fn missing_context(message: impl Into<String>) -> Self {
        Self::MissingContext(message.into())
    }

    /// Create an unsupported operation error for a statement kind
    pub fn unsupported(kind: QueryKind, operation: &'static str) -> Self {
        Self::UnsupportedOperation { kind, operation }
    }

    /// Check if this is a missing context error
    pub fn is_missing_context(&self) -> bool {
        matches!(self, Self::MissingContext(_))
    }

    /// Check if this is an unsupported operation error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
