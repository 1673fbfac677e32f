//! # sqlcraft
//!
//! Describe SQL statements as an object graph and compile them into
//! parameterized SQL text.
//!
//! ## Features
//!
//! - **Composable**: nested subqueries, joins, UNION / INTERSECT / MINUS
//! - **Parameterized**: every value becomes a `:vN` placeholder, numbered in
//!   text order across the whole statement
//! - **Dialects**: identifier quoting is a pluggable hook
//! - **Observable**: each compile emits a `tracing` event on `sqlcraft.sql`
//!
//! ## Example
//!
//! ```rust
//! use sqlcraft::{Conjunction, Direction, GenericBuilder, Select};
//!
//! let mut select = Select::new("user");
//! select.set_columns(["id", "name"])?;
//! select
//!     .left_join("news", "id", "author_id", &["title"])?
//!     .order_by("created_at", Direction::Desc);
//! select
//!     .where_()
//!     .equals("active", true)
//!     .sub_where(Conjunction::Or)
//!     .less_than("id", 10)
//!     .greater_than("id", 100);
//! select.limit(0, 20);
//!
//! let compiled = GenericBuilder::new().compile(&select)?;
//! assert_eq!(
//!     compiled.sql(),
//!     "SELECT user.id, user.name, news.title FROM user \
//!      LEFT JOIN news ON (news.author_id = user.id) \
//!      WHERE (user.active = :v1) AND ((user.id < :v2) OR (user.id > :v3)) \
//!      ORDER BY news.created_at DESC LIMIT :v4, :v5"
//! );
//! assert_eq!(compiled.params().len(), 5);
//! # Ok::<(), sqlcraft::SqlError>(())
//! ```

pub mod builder;
pub mod config;
pub mod dialect;
pub mod error;
pub mod format;
mod logging;
pub mod node;
pub mod query;
pub mod value;
pub mod writer;

pub use builder::{Builder, Compiled, GenericBuilder, MySqlBuilder};
pub use config::{BuilderConfig, FormatConfig};
pub use dialect::{Dialect, DialectKind, GenericDialect, MySqlDialect};
pub use error::{SqlError, SqlResult};
pub use format::{KeywordFormatter, SqlFormatter};
pub use node::{Column, Direction, IntoColumn, NodeFactory, NodeSpec, OrderBy, Table, WILDCARD};
pub use query::{
    Comparison, Conjunction, Delete, Insert, Intersect, JoinType, MatchMode, Minus, Operand,
    Query, QueryKind, Select, Statement, StatementRef, Union, UnionAll, Update, Where,
};
pub use value::{Params, Value};
pub use writer::PlaceholderAllocator;
