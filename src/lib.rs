//! # QueryHaus
//!
//! A fluent SQL text builder. Clause fragments supplied by the caller are
//! concatenated in canonical clause order; nothing is parsed, validated
//! against a schema or executed.
//!
//! ## Quick Start
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! let sql = QueryBuilder::new()
//!     .select(["one", "two"])
//!     .from("some_table")
//!     .inner_join("other_table", "other_table.id = some_table.other_id")
//!     .and_where(condition(|c| c.or("a = 1").or("b > 10")))
//!     .order_by("one", SortOrder::Asc)
//!     .limit(20)
//!     .offset(10)
//!     .build();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT one, two FROM some_table INNER JOIN other_table ON other_table.id = some_table.other_id \
//!      WHERE ( a = 1 OR b > 10 ) ORDER BY one ASC OFFSET 10 LIMIT 20 "
//! );
//! ```
//!
//! ## Escaping
//!
//! Condition text is spliced in verbatim. Escape caller-supplied values with
//! [`quote`](clause_builder::quote) / [`double_quote`](clause_builder::double_quote),
//! or bind them at the driver instead.

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::QueryHaus;
pub use crate::errors::QueryHausError;

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, ConfigError};

// Re-export internal crates
pub use clause_builder;
pub use config;
