//! Leaf nodes of the statement graph: tables, columns, ordering.

pub mod column;
pub mod factory;
pub mod order_by;
pub mod table;

pub use column::{Column, IntoColumn, WILDCARD};
pub use factory::{NodeFactory, NodeSpec};
pub use order_by::{Direction, OrderBy};
pub use table::Table;
