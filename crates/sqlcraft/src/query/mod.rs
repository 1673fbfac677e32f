//! Statement model: every statement kind plus the shared predicate tree.
//!
//! Statement kinds form a closed set ([`QueryKind`]); writers dispatch on
//! [`StatementRef`] with an exhaustive match.

pub mod delete;
pub mod insert;
pub mod select;
pub mod set_op;
pub mod update;
pub mod where_tree;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{CountMode, FunctionColumn, JoinType, Limit, Select, SelectColumn, ValueColumn};
pub use set_op::{Intersect, Minus, Union, UnionAll};
pub use update::Update;
pub use where_tree::{
    BetweenClause, BitClause, Comparison, ComparisonClause, Conjunction, ExistsClause, InClause,
    MatchClause, MatchMode, NullClause, Operand, Where,
};

use crate::error::{SqlError, SqlResult};
use crate::node::Table;
use std::fmt;

/// Statement kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Select,
    Insert,
    Update,
    Delete,
    Union,
    UnionAll,
    Intersect,
    Minus,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Union => "UNION",
            Self::UnionAll => "UNION ALL",
            Self::Intersect => "INTERSECT",
            Self::Minus => "MINUS",
        }
    }

    /// True for the set-combinators, which have no table or predicate.
    pub fn is_set_operation(&self) -> bool {
        matches!(
            self,
            Self::Union | Self::UnionAll | Self::Intersect | Self::Minus
        )
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comments render as a single `-- ` line; line breaks become spaces.
pub(crate) fn single_line(comment: String) -> String {
    if comment.contains(['\r', '\n']) {
        comment.replace(['\r', '\n'], " ")
    } else {
        comment
    }
}

/// Borrowed view of any statement, used for writer dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StatementRef<'a> {
    Select(&'a Select),
    Insert(&'a Insert),
    Update(&'a Update),
    Delete(&'a Delete),
    Union(&'a Union),
    UnionAll(&'a UnionAll),
    Intersect(&'a Intersect),
    Minus(&'a Minus),
}

impl StatementRef<'_> {
    pub fn kind(&self) -> QueryKind {
        match self {
            Self::Select(_) => QueryKind::Select,
            Self::Insert(_) => QueryKind::Insert,
            Self::Update(_) => QueryKind::Update,
            Self::Delete(_) => QueryKind::Delete,
            Self::Union(_) => QueryKind::Union,
            Self::UnionAll(_) => QueryKind::UnionAll,
            Self::Intersect(_) => QueryKind::Intersect,
            Self::Minus(_) => QueryKind::Minus,
        }
    }
}

/// Behaviour shared by every statement.
///
/// Table and predicate access is fallible: set-combinators reject both with
/// [`SqlError::UnsupportedOperation`], and INSERT has no predicate.
pub trait Query {
    fn kind(&self) -> QueryKind;

    fn as_statement(&self) -> StatementRef<'_>;

    fn comment(&self) -> Option<&str>;

    /// The statement's table, if one is set.
    fn try_table(&self) -> SqlResult<Option<&Table>>;

    /// The statement's WHERE tree, if one was created.
    fn try_where(&self) -> SqlResult<Option<&Where>>;

    /// The statement's WHERE tree, created on first use.
    fn try_where_mut(&mut self) -> SqlResult<&mut Where>;
}

impl Query for Select {
    fn kind(&self) -> QueryKind {
        QueryKind::Select
    }

    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Select(self)
    }

    fn comment(&self) -> Option<&str> {
        Select::comment(self)
    }

    fn try_table(&self) -> SqlResult<Option<&Table>> {
        Ok(self.table())
    }

    fn try_where(&self) -> SqlResult<Option<&Where>> {
        Ok(self.where_clause())
    }

    fn try_where_mut(&mut self) -> SqlResult<&mut Where> {
        Ok(self.where_())
    }
}

impl Query for Insert {
    fn kind(&self) -> QueryKind {
        QueryKind::Insert
    }

    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Insert(self)
    }

    fn comment(&self) -> Option<&str> {
        Insert::comment(self)
    }

    fn try_table(&self) -> SqlResult<Option<&Table>> {
        Ok(Some(self.table()))
    }

    fn try_where(&self) -> SqlResult<Option<&Where>> {
        Err(SqlError::unsupported(QueryKind::Insert, "where"))
    }

    fn try_where_mut(&mut self) -> SqlResult<&mut Where> {
        Err(SqlError::unsupported(QueryKind::Insert, "where"))
    }
}

impl Query for Update {
    fn kind(&self) -> QueryKind {
        QueryKind::Update
    }

    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Update(self)
    }

    fn comment(&self) -> Option<&str> {
        Update::comment(self)
    }

    fn try_table(&self) -> SqlResult<Option<&Table>> {
        Ok(Some(self.table()))
    }

    fn try_where(&self) -> SqlResult<Option<&Where>> {
        Ok(self.where_clause())
    }

    fn try_where_mut(&mut self) -> SqlResult<&mut Where> {
        Ok(self.where_())
    }
}

impl Query for Delete {
    fn kind(&self) -> QueryKind {
        QueryKind::Delete
    }

    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Delete(self)
    }

    fn comment(&self) -> Option<&str> {
        Delete::comment(self)
    }

    fn try_table(&self) -> SqlResult<Option<&Table>> {
        Ok(Some(self.table()))
    }

    fn try_where(&self) -> SqlResult<Option<&Where>> {
        Ok(self.where_clause())
    }

    fn try_where_mut(&mut self) -> SqlResult<&mut Where> {
        Ok(self.where_())
    }
}

/// Owned statement of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Union(Union),
    UnionAll(UnionAll),
    Intersect(Intersect),
    Minus(Minus),
}

impl Statement {
    fn borrowed(&self) -> StatementRef<'_> {
        match self {
            Self::Select(s) => StatementRef::Select(s),
            Self::Insert(s) => StatementRef::Insert(s),
            Self::Update(s) => StatementRef::Update(s),
            Self::Delete(s) => StatementRef::Delete(s),
            Self::Union(s) => StatementRef::Union(s),
            Self::UnionAll(s) => StatementRef::UnionAll(s),
            Self::Intersect(s) => StatementRef::Intersect(s),
            Self::Minus(s) => StatementRef::Minus(s),
        }
    }

    fn as_query(&self) -> &dyn Query {
        match self {
            Self::Select(s) => s,
            Self::Insert(s) => s,
            Self::Update(s) => s,
            Self::Delete(s) => s,
            Self::Union(s) => s,
            Self::UnionAll(s) => s,
            Self::Intersect(s) => s,
            Self::Minus(s) => s,
        }
    }

    fn as_query_mut(&mut self) -> &mut dyn Query {
        match self {
            Self::Select(s) => s,
            Self::Insert(s) => s,
            Self::Update(s) => s,
            Self::Delete(s) => s,
            Self::Union(s) => s,
            Self::UnionAll(s) => s,
            Self::Intersect(s) => s,
            Self::Minus(s) => s,
        }
    }
}

impl Query for Statement {
    fn kind(&self) -> QueryKind {
        self.as_query().kind()
    }

    fn as_statement(&self) -> StatementRef<'_> {
        self.borrowed()
    }

    fn comment(&self) -> Option<&str> {
        self.as_query().comment()
    }

    fn try_table(&self) -> SqlResult<Option<&Table>> {
        self.as_query().try_table()
    }

    fn try_where(&self) -> SqlResult<Option<&Where>> {
        self.as_query().try_where()
    }

    fn try_where_mut(&mut self) -> SqlResult<&mut Where> {
        self.as_query_mut().try_where_mut()
    }
}

macro_rules! impl_statement_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Statement {
                fn from(s: $variant) -> Self {
                    Statement::$variant(s)
                }
            }
        )*
    };
}

impl_statement_from!(Select, Insert, Update, Delete, Union, UnionAll, Intersect, Minus);
