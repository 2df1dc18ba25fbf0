//! Query builder utilities
//!
//! This module provides SQL query construction utilities. Each clause kind
//! lives in its own module and extends [`QueryBuilder`] with its methods.

pub mod builder;
pub mod condition;
pub mod cte;
pub mod filter;
pub mod grouping;
pub mod join;
pub mod ordering;
pub mod pagination;
pub mod set_operation;
pub mod sql_generation;
pub mod subquery;



pub use builder::QueryBuilder;
pub use condition::{condition, ConditionBuilder};
pub use cte::CommonTableExpression;
pub use filter::{LogicalOperator, Operator};
pub use join::{JoinClause, JoinType};
pub use ordering::SortOrder;
pub use pagination::Pagination;
pub use set_operation::SetOperator;
pub use sql_generation::SqlGenerator;
pub use subquery::sub;
