//! Set-combinators over SELECT statements.

use super::select::Select;
use super::where_tree::Where;
use super::{Query, QueryKind, StatementRef, single_line};
use crate::error::{SqlError, SqlResult};
use crate::node::Table;

macro_rules! set_operation {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            selects: Vec<Select>,
            comment: Option<String>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Append a member SELECT.
            pub fn add(&mut self, select: Select) -> &mut Self {
                self.selects.push(select);
                self
            }

            pub fn selects(&self) -> &[Select] {
                &self.selects
            }

            pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
                self.comment = Some(single_line(comment.into()));
                self
            }

            pub fn comment(&self) -> Option<&str> {
                self.comment.as_deref()
            }
        }

        impl FromIterator<Select> for $name {
            fn from_iter<I: IntoIterator<Item = Select>>(iter: I) -> Self {
                Self {
                    selects: iter.into_iter().collect(),
                    comment: None,
                }
            }
        }

        impl Query for $name {
            fn kind(&self) -> QueryKind {
                QueryKind::$kind
            }

            fn as_statement(&self) -> StatementRef<'_> {
                StatementRef::$kind(self)
            }

            fn comment(&self) -> Option<&str> {
                $name::comment(self)
            }

            fn try_table(&self) -> SqlResult<Option<&Table>> {
                Err(SqlError::unsupported(QueryKind::$kind, "table"))
            }

            fn try_where(&self) -> SqlResult<Option<&Where>> {
                Err(SqlError::unsupported(QueryKind::$kind, "where"))
            }

            fn try_where_mut(&mut self) -> SqlResult<&mut Where> {
                Err(SqlError::unsupported(QueryKind::$kind, "where"))
            }
        }
    };
}

set_operation!(
    /// `UNION` of any number of SELECTs.
    Union,
    Union
);
set_operation!(
    /// `UNION ALL` of any number of SELECTs.
    UnionAll,
    UnionAll
);
set_operation!(
    /// `INTERSECT` of any number of SELECTs.
    Intersect,
    Intersect
);

/// `first MINUS second`.
#[derive(Debug, Clone, PartialEq)]
pub struct Minus {
    first: Select,
    second: Select,
    comment: Option<String>,
}

impl Minus {
    pub fn new(first: Select, second: Select) -> Self {
        Self {
            first,
            second,
            comment: None,
        }
    }

    pub fn first(&self) -> &Select {
        &self.first
    }

    pub fn second(&self) -> &Select {
        &self.second
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(single_line(comment.into()));
        self
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl Query for Minus {
    fn kind(&self) -> QueryKind {
        QueryKind::Minus
    }

    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Minus(self)
    }

    fn comment(&self) -> Option<&str> {
        Minus::comment(self)
    }

    fn try_table(&self) -> SqlResult<Option<&Table>> {
        Err(SqlError::unsupported(QueryKind::Minus, "table"))
    }

    fn try_where(&self) -> SqlResult<Option<&Where>> {
        Err(SqlError::unsupported(QueryKind::Minus, "where"))
    }

    fn try_where_mut(&mut self) -> SqlResult<&mut Where> {
        Err(SqlError::unsupported(QueryKind::Minus, "where"))
    }
}
