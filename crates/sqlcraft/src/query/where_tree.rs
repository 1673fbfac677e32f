//! Predicate tree shared by WHERE, HAVING and join ON conditions.

use super::select::Select;
use crate::error::{SqlError, SqlResult};
use crate::node::{Column, IntoColumn, Table};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// How a tree joins its own clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Conjunction {
    #[default]
    And,
    Or,
    AndNot,
    OrNot,
}

impl Conjunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::AndNot => "AND NOT",
            Self::OrNot => "OR NOT",
        }
    }
}

impl FromStr for Conjunction {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            "AND NOT" => Ok(Self::AndNot),
            "OR NOT" => Ok(Self::OrNot),
            _ => Err(SqlError::InvalidConjunction(s.to_string())),
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    NotLike,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "<>",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Bound through a placeholder
    Value(Value),
    /// Column-to-column comparison
    Column(Column),
    /// Scalar subquery
    Select(Box<Select>),
}

macro_rules! impl_operand_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_operand_from_value!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, &str, String);

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::Value(Value::from(v))
    }
}

impl From<Column> for Operand {
    fn from(c: Column) -> Self {
        Operand::Column(c)
    }
}

impl From<Select> for Operand {
    fn from(s: Select) -> Self {
        Operand::Select(Box::new(s))
    }
}

/// Full-text search modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Natural,
    Boolean,
    QueryExpansion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonClause {
    pub subject: Column,
    pub operator: Comparison,
    pub target: Operand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BetweenClause {
    pub subject: Column,
    pub low: Value,
    pub high: Value,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InClause {
    pub subject: Column,
    pub values: Vec<Value>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullClause {
    pub subject: Column,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BitClause {
    pub subject: Column,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchClause {
    pub columns: Vec<Column>,
    pub values: Vec<Value>,
    pub mode: MatchMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExistsClause {
    pub select: Box<Select>,
    pub negated: bool,
}

/// A predicate tree.
///
/// Each clause kind lives in its own collection; the tree's conjunction joins
/// every rendered clause, and nested sub-trees carry their own conjunction.
/// Bare column names resolve against the table the tree is bound to.
///
/// ```rust
/// use sqlcraft::{Conjunction, Where};
///
/// let mut w = Where::new();
/// w.equals("a", 1).equals("a", 2);
/// w.sub_where(Conjunction::Or).less_than("b", 10).greater_than("b", 100);
/// assert!(!w.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Where {
    table: Option<Table>,
    conjunction: Conjunction,
    comparisons: Vec<ComparisonClause>,
    betweens: Vec<BetweenClause>,
    ins: Vec<InClause>,
    null_checks: Vec<NullClause>,
    bits: Vec<BitClause>,
    matches: Vec<MatchClause>,
    exists: Vec<ExistsClause>,
    literals: Vec<String>,
    sub_trees: Vec<Where>,
}

impl Where {
    /// Create an unbound tree; bare column names render unqualified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree whose bare column names resolve against `table`.
    pub fn bound(table: Option<Table>) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    /// Rebind this tree and its sub-trees to another table context.
    ///
    /// Clauses already added keep the columns they resolved to.
    pub(crate) fn rebind(&mut self, table: Option<&Table>) {
        self.table = table.cloned();
        for sub in &mut self.sub_trees {
            sub.rebind(table);
        }
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    /// Set the conjunction from text, rejecting anything but
    /// `AND`, `OR`, `AND NOT`, `OR NOT`.
    pub fn set_conjunction(&mut self, op: &str) -> SqlResult<&mut Self> {
        self.conjunction = op.parse()?;
        Ok(self)
    }

    pub fn use_conjunction(&mut self, conjunction: Conjunction) -> &mut Self {
        self.conjunction = conjunction;
        self
    }

    /// True iff every clause collection is empty.
    ///
    /// Sub-trees count even when they are empty themselves; the writer skips
    /// empty sub-trees when rendering.
    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
            && self.betweens.is_empty()
            && self.ins.is_empty()
            && self.null_checks.is_empty()
            && self.bits.is_empty()
            && self.matches.is_empty()
            && self.exists.is_empty()
            && self.literals.is_empty()
            && self.sub_trees.is_empty()
    }

    /// True when rendering would produce no text.
    pub fn renders_empty(&self) -> bool {
        self.comparisons.is_empty()
            && self.betweens.is_empty()
            && self.ins.is_empty()
            && self.null_checks.is_empty()
            && self.bits.is_empty()
            && self.matches.is_empty()
            && self.exists.is_empty()
            && self.literals.is_empty()
            && self.sub_trees.iter().all(Where::renders_empty)
    }

    fn resolve(&self, column: impl IntoColumn) -> Column {
        column.into_column(self.table.as_ref())
    }

    // ==================== Comparisons ====================

    /// Add `subject <op> target`.
    pub fn compare(
        &mut self,
        subject: impl IntoColumn,
        operator: Comparison,
        target: impl Into<Operand>,
    ) -> &mut Self {
        let subject = self.resolve(subject);
        self.comparisons.push(ComparisonClause {
            subject,
            operator,
            target: target.into(),
        });
        self
    }

    pub fn equals(&mut self, subject: impl IntoColumn, target: impl Into<Operand>) -> &mut Self {
        self.compare(subject, Comparison::Equals, target)
    }

    pub fn not_equals(&mut self, subject: impl IntoColumn, target: impl Into<Operand>) -> &mut Self {
        self.compare(subject, Comparison::NotEquals, target)
    }

    pub fn greater_than(&mut self, subject: impl IntoColumn, target: impl Into<Operand>) -> &mut Self {
        self.compare(subject, Comparison::GreaterThan, target)
    }

    pub fn greater_than_or_equal(
        &mut self,
        subject: impl IntoColumn,
        target: impl Into<Operand>,
    ) -> &mut Self {
        self.compare(subject, Comparison::GreaterThanOrEqual, target)
    }

    pub fn less_than(&mut self, subject: impl IntoColumn, target: impl Into<Operand>) -> &mut Self {
        self.compare(subject, Comparison::LessThan, target)
    }

    pub fn less_than_or_equal(
        &mut self,
        subject: impl IntoColumn,
        target: impl Into<Operand>,
    ) -> &mut Self {
        self.compare(subject, Comparison::LessThanOrEqual, target)
    }

    pub fn like(&mut self, subject: impl IntoColumn, pattern: impl Into<Operand>) -> &mut Self {
        self.compare(subject, Comparison::Like, pattern)
    }

    pub fn not_like(&mut self, subject: impl IntoColumn, pattern: impl Into<Operand>) -> &mut Self {
        self.compare(subject, Comparison::NotLike, pattern)
    }

    // ==================== Sets & ranges ====================

    /// Add `subject IN (values...)`.
    ///
    /// Several IN conditions on the same column are kept side by side.
    pub fn in_list<I>(&mut self, subject: impl IntoColumn, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push_in(subject, values, false)
    }

    /// Add `subject NOT IN (values...)`.
    pub fn not_in<I>(&mut self, subject: impl IntoColumn, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push_in(subject, values, true)
    }

    fn push_in<I>(&mut self, subject: impl IntoColumn, values: I, negated: bool) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let subject = self.resolve(subject);
        self.ins.push(InClause {
            subject,
            values: values.into_iter().map(Into::into).collect(),
            negated,
        });
        self
    }

    pub fn between(
        &mut self,
        subject: impl IntoColumn,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        self.push_between(subject, low.into(), high.into(), false)
    }

    pub fn not_between(
        &mut self,
        subject: impl IntoColumn,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        self.push_between(subject, low.into(), high.into(), true)
    }

    fn push_between(&mut self, subject: impl IntoColumn, low: Value, high: Value, negated: bool) -> &mut Self {
        let subject = self.resolve(subject);
        self.betweens.push(BetweenClause {
            subject,
            low,
            high,
            negated,
        });
        self
    }

    // ==================== NULL & bit checks ====================

    pub fn is_null(&mut self, subject: impl IntoColumn) -> &mut Self {
        let subject = self.resolve(subject);
        self.null_checks.push(NullClause {
            subject,
            negated: false,
        });
        self
    }

    pub fn is_not_null(&mut self, subject: impl IntoColumn) -> &mut Self {
        let subject = self.resolve(subject);
        self.null_checks.push(NullClause {
            subject,
            negated: true,
        });
        self
    }

    /// Add a bit/boolean flag check: `ISNULL(subject, 0) = value`.
    pub fn add_bit_clause(&mut self, subject: impl IntoColumn, value: impl Into<Value>) -> &mut Self {
        let subject = self.resolve(subject);
        self.bits.push(BitClause {
            subject,
            value: value.into(),
        });
        self
    }

    // ==================== Full-text ====================

    /// `MATCH(columns) AGAINST(values)` in natural language mode.
    pub fn matches<C, V>(&mut self, columns: C, values: V) -> &mut Self
    where
        C: IntoIterator,
        C::Item: IntoColumn,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        self.push_match(columns, values, MatchMode::Natural)
    }

    /// `MATCH(columns) AGAINST(values IN BOOLEAN MODE)`.
    pub fn match_boolean<C, V>(&mut self, columns: C, values: V) -> &mut Self
    where
        C: IntoIterator,
        C::Item: IntoColumn,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        self.push_match(columns, values, MatchMode::Boolean)
    }

    /// `MATCH(columns) AGAINST(values WITH QUERY EXPANSION)`.
    pub fn match_with_query_expansion<C, V>(&mut self, columns: C, values: V) -> &mut Self
    where
        C: IntoIterator,
        C::Item: IntoColumn,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        self.push_match(columns, values, MatchMode::QueryExpansion)
    }

    fn push_match<C, V>(&mut self, columns: C, values: V, mode: MatchMode) -> &mut Self
    where
        C: IntoIterator,
        C::Item: IntoColumn,
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        let columns = columns.into_iter().map(|c| self.resolve(c)).collect();
        self.matches.push(MatchClause {
            columns,
            values: values.into_iter().map(Into::into).collect(),
            mode,
        });
        self
    }

    // ==================== Subqueries & raw SQL ====================

    pub fn exists(&mut self, select: Select) -> &mut Self {
        self.exists.push(ExistsClause {
            select: Box::new(select),
            negated: false,
        });
        self
    }

    pub fn not_exists(&mut self, select: Select) -> &mut Self {
        self.exists.push(ExistsClause {
            select: Box::new(select),
            negated: true,
        });
        self
    }

    /// Add a raw SQL fragment.
    ///
    /// # Safety
    ///
    /// The fragment is emitted verbatim. The caller must ensure it is safe.
    pub fn as_literal(&mut self, sql: impl Into<String>) -> &mut Self {
        self.literals.push(sql.into());
        self
    }

    /// Open a nested tree joined into this one; returns the nested tree.
    pub fn sub_where(&mut self, conjunction: Conjunction) -> &mut Where {
        let mut sub = Where::bound(self.table.clone());
        sub.conjunction = conjunction;
        self.sub_trees.push(sub);
        let last = self.sub_trees.len() - 1;
        &mut self.sub_trees[last]
    }

    // ==================== Accessors ====================

    pub fn comparisons(&self) -> &[ComparisonClause] {
        &self.comparisons
    }

    pub fn betweens(&self) -> &[BetweenClause] {
        &self.betweens
    }

    pub fn ins(&self) -> &[InClause] {
        &self.ins
    }

    pub fn null_checks(&self) -> &[NullClause] {
        &self.null_checks
    }

    pub fn bit_clauses(&self) -> &[BitClause] {
        &self.bits
    }

    pub fn match_clauses(&self) -> &[MatchClause] {
        &self.matches
    }

    pub fn exists_clauses(&self) -> &[ExistsClause] {
        &self.exists
    }

    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    pub fn sub_trees(&self) -> &[Where] {
        &self.sub_trees
    }
}
