//! SELECT statement model, including join-flagged selects.

use super::single_line;
use super::where_tree::{Conjunction, Where};
use crate::error::{SqlError, SqlResult};
use crate::node::{Column, Direction, IntoColumn, NodeFactory, NodeSpec, OrderBy, Table, WILDCARD};
use crate::value::Value;

/// Join flavour of a join-flagged [`Select`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinType {
    #[default]
    Join,
    Inner,
    Left,
    Right,
    Cross,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "JOIN",
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// `(subselect) AS alias`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    pub select: Box<Select>,
    pub alias: String,
}

/// `:vN AS alias`
#[derive(Debug, Clone, PartialEq)]
pub struct ValueColumn {
    pub value: Value,
    pub alias: String,
}

/// `FUNC(args) AS alias`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionColumn {
    pub function: String,
    pub arguments: Vec<String>,
    pub alias: String,
}

/// Count-mode settings: `COUNT(column) [AS alias]`; `column` is `None` for `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMode {
    pub column: Option<Column>,
    pub alias: Option<String>,
}

/// LIMIT bounds as supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit {
    pub start: Option<u64>,
    pub count: Option<u64>,
}

impl Limit {
    pub fn is_set(&self) -> bool {
        self.start.is_some() || self.count.is_some()
    }
}

/// SELECT statement.
///
/// A Select may also be flagged as a join of a parent Select: it then owns
/// its join type and ON condition, and its columns, WHERE, HAVING and
/// ORDER BY entries surface in the parent through the `all_*` accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    table: Option<Table>,
    comment: Option<String>,
    columns: Option<Vec<Column>>,
    select_columns: Vec<SelectColumn>,
    value_columns: Vec<ValueColumn>,
    function_columns: Vec<FunctionColumn>,
    joins: Vec<Select>,
    join_type: Option<JoinType>,
    join_condition: Where,
    where_clause: Option<Where>,
    having: Option<Where>,
    group_by: Vec<Column>,
    order_by: Vec<OrderBy>,
    limit: Limit,
    distinct: bool,
    count: Option<CountMode>,
}

impl Select {
    /// Create a SELECT over `table`.
    pub fn new(table: impl Into<Table>) -> Self {
        let table = table.into();
        Self {
            join_condition: Where::bound(Some(table.clone())),
            table: Some(table),
            ..Self::default()
        }
    }

    /// Set (or replace) the table; predicate trees rebind to it.
    pub fn set_table(&mut self, table: impl Into<Table>) -> &mut Self {
        let table = table.into();
        self.join_condition.rebind(Some(&table));
        if let Some(w) = self.where_clause.as_mut() {
            w.rebind(Some(&table));
        }
        if let Some(h) = self.having.as_mut() {
            h.rebind(Some(&table));
        }
        self.table = Some(table);
        self
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(single_line(comment.into()));
        self
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    // ==================== Columns ====================

    /// Replace the column list.
    ///
    /// Accepts bare names or `(alias, name)` pairs; see [`NodeSpec`].
    pub fn set_columns<I>(&mut self, columns: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<NodeSpec>,
    {
        self.columns = Some(NodeFactory::columns(columns, self.table.as_ref())?);
        Ok(self)
    }

    /// Render `(subselect) AS alias` as a column.
    pub fn set_select_as_column(&mut self, select: Select, alias: impl Into<String>) -> &mut Self {
        self.select_columns.push(SelectColumn {
            select: Box::new(select),
            alias: alias.into(),
        });
        self
    }

    /// Render a bound value as a column.
    pub fn set_value_as_column(&mut self, value: impl Into<Value>, alias: impl Into<String>) -> &mut Self {
        self.value_columns.push(ValueColumn {
            value: value.into(),
            alias: alias.into(),
        });
        self
    }

    /// Render `FUNC(args) AS alias` as a column; without arguments the
    /// parentheses are omitted.
    pub fn set_function_as_column<I>(
        &mut self,
        function: impl Into<String>,
        arguments: I,
        alias: impl Into<String>,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.function_columns.push(FunctionColumn {
            function: function.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
            alias: alias.into(),
        });
        self
    }

    /// Switch to count mode: only `COUNT(column) [AS alias]` is rendered.
    ///
    /// `"*"` counts rows; an empty alias renders none.
    pub fn count(&mut self, column: &str, alias: &str) -> &mut Self {
        let column = if column == WILDCARD || column.is_empty() {
            None
        } else {
            Some(column.into_column(self.table.as_ref()))
        };
        let alias = if alias.is_empty() {
            None
        } else {
            Some(alias.to_string())
        };
        self.count = Some(CountMode { column, alias });
        self
    }

    pub fn count_mode(&self) -> Option<&CountMode> {
        self.count.as_ref()
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Own column list. An unset or empty list means the wildcard for a
    /// top-level select and nothing for a join.
    pub fn columns(&self) -> SqlResult<Vec<Column>> {
        let table = self.table.as_ref().ok_or_else(|| {
            SqlError::missing_context("cannot enumerate columns of a SELECT without a table")
        })?;
        Ok(match &self.columns {
            Some(columns) if !columns.is_empty() => columns.clone(),
            _ if self.is_join() => Vec::new(),
            _ => vec![Column::new(WILDCARD, table)],
        })
    }

    pub fn select_columns(&self) -> &[SelectColumn] {
        &self.select_columns
    }

    pub fn value_columns(&self) -> &[ValueColumn] {
        &self.value_columns
    }

    pub fn function_columns(&self) -> &[FunctionColumn] {
        &self.function_columns
    }

    // ==================== Joins ====================

    /// Join `table` on `table.ref_column = self.self_column`.
    ///
    /// Registration is keyed by table name: joining an already-joined table
    /// returns the existing join untouched.
    pub fn join(
        &mut self,
        table: impl Into<Table>,
        self_column: impl IntoColumn,
        ref_column: impl IntoColumn,
        columns: &[&str],
        join_type: JoinType,
    ) -> SqlResult<&mut Select> {
        let table = table.into();
        if let Some(idx) = self.join_index(table.name()) {
            tracing::trace!(
                target: "sqlcraft.builder",
                table = table.name(),
                "join already registered, keeping existing"
            );
            return Ok(&mut self.joins[idx]);
        }

        let self_column = self_column.into_column(self.table.as_ref());
        let mut child = Select::new(table);
        child.join_type = Some(join_type);
        if !columns.is_empty() {
            child.set_columns(columns.iter().copied())?;
        }
        child.join_condition.equals(ref_column, self_column);
        Ok(self.push_join(child))
    }

    pub fn inner_join(
        &mut self,
        table: impl Into<Table>,
        self_column: impl IntoColumn,
        ref_column: impl IntoColumn,
        columns: &[&str],
    ) -> SqlResult<&mut Select> {
        self.join(table, self_column, ref_column, columns, JoinType::Inner)
    }

    pub fn left_join(
        &mut self,
        table: impl Into<Table>,
        self_column: impl IntoColumn,
        ref_column: impl IntoColumn,
        columns: &[&str],
    ) -> SqlResult<&mut Select> {
        self.join(table, self_column, ref_column, columns, JoinType::Left)
    }

    pub fn right_join(
        &mut self,
        table: impl Into<Table>,
        self_column: impl IntoColumn,
        ref_column: impl IntoColumn,
        columns: &[&str],
    ) -> SqlResult<&mut Select> {
        self.join(table, self_column, ref_column, columns, JoinType::Right)
    }

    /// `CROSS JOIN table` with no ON condition.
    pub fn cross_join(&mut self, table: impl Into<Table>, columns: &[&str]) -> SqlResult<&mut Select> {
        let table = table.into();
        if let Some(idx) = self.join_index(table.name()) {
            return Ok(&mut self.joins[idx]);
        }
        let mut child = Select::new(table);
        child.join_type = Some(JoinType::Cross);
        if !columns.is_empty() {
            child.set_columns(columns.iter().copied())?;
        }
        Ok(self.push_join(child))
    }

    /// Attach a prebuilt select as a join on `child.ref_column = self.self_column`.
    ///
    /// Keeps the child's join type (plain `JOIN` when unset) and any ON
    /// conditions it already carries.
    pub fn add_join(
        &mut self,
        mut child: Select,
        self_column: impl IntoColumn,
        ref_column: impl IntoColumn,
    ) -> SqlResult<&mut Select> {
        let name = child
            .table
            .as_ref()
            .map(|t| t.name().to_string())
            .ok_or_else(|| SqlError::missing_context("cannot join a SELECT without a table"))?;
        if let Some(idx) = self.join_index(&name) {
            return Ok(&mut self.joins[idx]);
        }
        let self_column = self_column.into_column(self.table.as_ref());
        child.join_type.get_or_insert(JoinType::Join);
        child.join_condition.equals(ref_column, self_column);
        Ok(self.push_join(child))
    }

    fn join_index(&self, table_name: &str) -> Option<usize> {
        self.joins
            .iter()
            .position(|j| j.table.as_ref().is_some_and(|t| t.name() == table_name))
    }

    fn push_join(&mut self, child: Select) -> &mut Select {
        self.joins.push(child);
        let last = self.joins.len() - 1;
        &mut self.joins[last]
    }

    /// Own joins, in registration order.
    pub fn joins(&self) -> &[Select] {
        &self.joins
    }

    pub fn is_join(&self) -> bool {
        self.join_type.is_some()
    }

    pub fn join_type(&self) -> Option<JoinType> {
        self.join_type
    }

    pub fn set_join_type(&mut self, join_type: JoinType) -> &mut Self {
        self.join_type = Some(join_type);
        self
    }

    /// ON condition of a join-flagged select.
    pub fn join_condition(&self) -> &Where {
        &self.join_condition
    }

    pub fn join_condition_mut(&mut self) -> &mut Where {
        &mut self.join_condition
    }

    // ==================== WHERE / HAVING ====================

    /// The WHERE tree, created on first use.
    pub fn where_(&mut self) -> &mut Where {
        let table = self.table.clone();
        self.where_clause.get_or_insert_with(|| Where::bound(table))
    }

    pub fn where_clause(&self) -> Option<&Where> {
        self.where_clause.as_ref()
    }

    /// The HAVING tree, created on first use, joined with `conjunction`.
    pub fn having(&mut self, conjunction: Conjunction) -> &mut Where {
        let table = self.table.clone();
        let having = self.having.get_or_insert_with(|| Where::bound(table));
        having.use_conjunction(conjunction);
        having
    }

    /// [`Select::having`] with a textual conjunction.
    pub fn having_op(&mut self, op: &str) -> SqlResult<&mut Where> {
        let conjunction = op.parse()?;
        Ok(self.having(conjunction))
    }

    pub fn having_clause(&self) -> Option<&Where> {
        self.having.as_ref()
    }

    // ==================== Grouping, ordering, limits ====================

    pub fn group_by<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoColumn,
    {
        let table = self.table.as_ref();
        let resolved: Vec<Column> = columns.into_iter().map(|c| c.into_column(table)).collect();
        self.group_by.extend(resolved);
        self
    }

    pub fn group_by_columns(&self) -> &[Column] {
        &self.group_by
    }

    /// Order by a column of this select's table (or an explicit [`Column`]).
    ///
    /// On a join-flagged select the entry surfaces in the enclosing select's
    /// ORDER BY through [`Select::all_order_by`].
    pub fn order_by(&mut self, column: impl IntoColumn, direction: Direction) -> &mut Self {
        let column = column.into_column(self.table.as_ref());
        self.order_by.push(OrderBy::new(column, direction));
        self
    }

    pub fn add_order_by(&mut self, order_by: OrderBy) -> &mut Self {
        self.order_by.push(order_by);
        self
    }

    pub fn order_by_entries(&self) -> &[OrderBy] {
        &self.order_by
    }

    /// `LIMIT start, count`; both bounds count as supplied.
    pub fn limit(&mut self, start: u64, count: u64) -> &mut Self {
        self.limit = Limit {
            start: Some(start),
            count: Some(count),
        };
        self
    }

    /// Supply only the row count; the start renders as 0.
    pub fn limit_count(&mut self, count: u64) -> &mut Self {
        self.limit.count = Some(count);
        self
    }

    /// Supply only the start offset; the count renders as 0.
    pub fn offset(&mut self, start: u64) -> &mut Self {
        self.limit.start = Some(start);
        self
    }

    pub fn limit_bounds(&self) -> Limit {
        self.limit
    }

    // ==================== Flattening ====================

    /// Own columns followed by those of every descendant join, depth-first.
    pub fn all_columns(&self) -> SqlResult<Vec<Column>> {
        let mut columns = self.columns()?;
        for join in &self.joins {
            columns.extend(join.all_columns()?);
        }
        Ok(columns)
    }

    /// Own subquery columns followed by those of every descendant join.
    pub fn all_select_columns(&self) -> Vec<&SelectColumn> {
        let mut columns: Vec<&SelectColumn> = self.select_columns.iter().collect();
        for join in &self.joins {
            columns.extend(join.all_select_columns());
        }
        columns
    }

    pub fn all_value_columns(&self) -> Vec<&ValueColumn> {
        let mut columns: Vec<&ValueColumn> = self.value_columns.iter().collect();
        for join in &self.joins {
            columns.extend(join.all_value_columns());
        }
        columns
    }

    pub fn all_function_columns(&self) -> Vec<&FunctionColumn> {
        let mut columns: Vec<&FunctionColumn> = self.function_columns.iter().collect();
        for join in &self.joins {
            columns.extend(join.all_function_columns());
        }
        columns
    }

    /// Own WHERE tree followed by those of every descendant join.
    pub fn all_wheres(&self) -> Vec<&Where> {
        let mut wheres: Vec<&Where> = self.where_clause.iter().collect();
        for join in &self.joins {
            wheres.extend(join.all_wheres());
        }
        wheres
    }

    /// Own HAVING tree followed by those of every descendant join.
    pub fn all_havings(&self) -> Vec<&Where> {
        let mut havings: Vec<&Where> = self.having.iter().collect();
        for join in &self.joins {
            havings.extend(join.all_havings());
        }
        havings
    }

    /// Every descendant join, depth-first in declaration order.
    pub fn all_joins(&self) -> Vec<&Select> {
        let mut joins = Vec::new();
        for join in &self.joins {
            joins.push(join);
            joins.extend(join.all_joins());
        }
        joins
    }

    /// Own ORDER BY entries followed by those of every descendant join.
    pub fn all_order_by(&self) -> Vec<&OrderBy> {
        let mut entries: Vec<&OrderBy> = self.order_by.iter().collect();
        for join in &self.joins {
            entries.extend(join.all_order_by());
        }
        entries
    }
}
