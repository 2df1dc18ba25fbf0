//! Clause Builder - SQL text assembly for QueryHaus
//!
//! This crate provides the query builder, the condition builder for nested
//! AND/OR groups, quote escaping helpers and small operator utilities. It only
//! produces strings: nothing here parses, validates or executes SQL.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod query_builder;
pub mod sanitize;
pub mod utils;
pub mod validation;

pub use errors::QueryError;
pub use query_builder::{
    condition, sub, ConditionBuilder, JoinType, Operator, QueryBuilder, SetOperator, SortOrder,
};
pub use sanitize::{double_quote, literal, quote, sanitize};
pub use utils::{flip_sorting_mode, invert_operator};
pub use validation::{ValidatedIdentifier, ValidationError};

pub use config::BuilderConfig;
