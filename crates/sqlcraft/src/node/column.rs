use super::table::Table;
use crate::error::{SqlError, SqlResult};

/// The wildcard column marker.
pub const WILDCARD: &str = "*";

/// A column reference, optionally bound to a table and aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    table: Option<Table>,
    alias: Option<String>,
}

impl Column {
    /// Create a column owned by `table`.
    pub fn new(name: impl Into<String>, table: impl Into<Table>) -> Self {
        Self {
            name: name.into(),
            table: Some(table.into()),
            alias: None,
        }
    }

    /// Create a column with no owning table; it renders unqualified.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            alias: None,
        }
    }

    /// Create an aliased column.
    ///
    /// Fails with [`SqlError::InvalidAlias`] when `name` is the wildcard.
    pub fn aliased(
        name: impl Into<String>,
        table: impl Into<Table>,
        alias: impl Into<String>,
    ) -> SqlResult<Self> {
        let mut column = Self::new(name, table);
        column.set_alias(alias)?;
        Ok(column)
    }

    /// Set the alias; an empty string clears it.
    pub fn set_alias(&mut self, alias: impl Into<String>) -> SqlResult<&mut Self> {
        let alias = alias.into();
        if alias.is_empty() {
            self.alias = None;
            return Ok(self);
        }
        if self.is_wildcard() {
            return Err(SqlError::InvalidAlias {
                column: self.name.clone(),
                alias,
            });
        }
        self.alias = Some(alias);
        Ok(self)
    }

    /// Rename the column. Renaming to the wildcard drops any alias.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        if self.is_wildcard() {
            self.alias = None;
        }
        self
    }

    pub fn set_table(&mut self, table: impl Into<Table>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }
}

/// Resolve a column reference against a table context.
///
/// Bare names bind to the context table; an explicit [`Column`] keeps its own.
pub trait IntoColumn {
    fn into_column(self, context: Option<&Table>) -> Column;
}

impl IntoColumn for Column {
    fn into_column(self, _context: Option<&Table>) -> Column {
        self
    }
}

impl IntoColumn for &Column {
    fn into_column(self, _context: Option<&Table>) -> Column {
        self.clone()
    }
}

impl IntoColumn for &str {
    fn into_column(self, context: Option<&Table>) -> Column {
        Column {
            name: self.to_string(),
            table: context.cloned(),
            alias: None,
        }
    }
}

impl IntoColumn for String {
    fn into_column(self, context: Option<&Table>) -> Column {
        Column {
            name: self,
            table: context.cloned(),
            alias: None,
        }
    }
}

impl IntoColumn for &String {
    fn into_column(self, context: Option<&Table>) -> Column {
        self.as_str().into_column(context)
    }
}
