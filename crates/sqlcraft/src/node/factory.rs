//! Normalization of shorthand column/table specifications.

use super::column::{Column, WILDCARD};
use super::table::Table;
use crate::error::SqlResult;

/// A shorthand node specification: a bare value, or a single `{key: value}`
/// entry where a non-numeric key is the alias.
///
/// ```rust
/// use sqlcraft::NodeSpec;
///
/// assert_eq!(NodeSpec::from("id").alias(), None);
/// assert_eq!(NodeSpec::from(("uid", "id")).alias(), Some("uid"));
/// assert_eq!(NodeSpec::keyed("0", "id").alias(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    key: Option<String>,
    value: String,
}

impl NodeSpec {
    /// A bare value with no key.
    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }

    /// A `{key: value}` entry.
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The alias implied by the key: absent, empty and numeric keys give none.
    pub fn alias(&self) -> Option<&str> {
        match self.key.as_deref() {
            Some(key) if !key.is_empty() && !key.chars().all(|c| c.is_ascii_digit()) => Some(key),
            _ => None,
        }
    }
}

impl From<&str> for NodeSpec {
    fn from(value: &str) -> Self {
        Self::bare(value)
    }
}

impl From<String> for NodeSpec {
    fn from(value: String) -> Self {
        Self::bare(value)
    }
}

impl From<&String> for NodeSpec {
    fn from(value: &String) -> Self {
        Self::bare(value.as_str())
    }
}

/// `(alias, value)`
impl From<(&str, &str)> for NodeSpec {
    fn from((alias, value): (&str, &str)) -> Self {
        Self::keyed(alias, value)
    }
}

/// `(position, value)`: numeric keys never alias.
impl From<(usize, &str)> for NodeSpec {
    fn from((_, value): (usize, &str)) -> Self {
        Self::bare(value)
    }
}

/// Builds validated nodes from [`NodeSpec`]s.
pub struct NodeFactory;

impl NodeFactory {
    /// Build a column bound to `table` (unbound when `None`).
    ///
    /// A wildcard value never receives an alias, even if a key was supplied.
    pub fn column(spec: impl Into<NodeSpec>, table: Option<&Table>) -> SqlResult<Column> {
        let spec = spec.into();
        let mut column = match table {
            Some(table) => Column::new(spec.value(), table),
            None => Column::unbound(spec.value()),
        };
        if spec.value() != WILDCARD
            && let Some(alias) = spec.alias()
        {
            column.set_alias(alias)?;
        }
        Ok(column)
    }

    /// Build every column in `specs`, preserving order.
    pub fn columns<I>(specs: I, table: Option<&Table>) -> SqlResult<Vec<Column>>
    where
        I: IntoIterator,
        I::Item: Into<NodeSpec>,
    {
        specs
            .into_iter()
            .map(|spec| Self::column(spec, table))
            .collect()
    }

    /// Build a table; a non-numeric key becomes the table alias.
    pub fn table(spec: impl Into<NodeSpec>) -> Table {
        let spec = spec.into();
        let mut table = Table::new(spec.value());
        if let Some(alias) = spec.alias() {
            table.set_alias(alias);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_column_has_no_alias() {
        let table = Table::new("user");
        let column = NodeFactory::column("id", Some(&table)).unwrap();
        assert_eq!(column.name(), "id");
        assert_eq!(column.alias(), None);
        assert_eq!(column.table(), Some(&table));
    }

    #[test]
    fn keyed_column_is_aliased() {
        let column = NodeFactory::column(("userId", "user_id"), None).unwrap();
        assert_eq!(column.alias(), Some("userId"));
        assert!(column.table().is_none());
    }

    #[test]
    fn numeric_key_is_ignored() {
        let column = NodeFactory::column(NodeSpec::keyed("3", "id"), None).unwrap();
        assert_eq!(column.alias(), None);
        let column = NodeFactory::column((1usize, "id"), None).unwrap();
        assert_eq!(column.alias(), None);
    }

    #[test]
    fn wildcard_drops_alias() {
        let column = NodeFactory::column(("all", "*"), None).unwrap();
        assert!(column.is_wildcard());
        assert_eq!(column.alias(), None);
    }

    #[test]
    fn keyed_table_is_aliased() {
        let table = NodeFactory::table(("u", "user"));
        assert_eq!(table.name(), "user");
        assert_eq!(table.alias(), Some("u"));
    }
}
