//! Convenience re-exports for common QueryHaus usage
//!
//! This prelude module re-exports the most commonly used items from the QueryHaus crates,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! let sql = QueryBuilder::new().select(["1"]).build();
//! assert_eq!(sql, "SELECT 1 ");
//! ```

// Core QueryHaus components
pub use crate::core::QueryHaus;
pub use crate::errors::QueryHausError;

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, ConfigError};

// Re-export commonly used clause-builder items for convenience
pub use clause_builder::prelude::*;
