//! Convenience re-exports for common clause-builder usage

// Builders
pub use crate::query_builder::{condition, sub, ConditionBuilder, QueryBuilder};

// Clause vocabulary
pub use crate::query_builder::{JoinType, Operator, SetOperator, SortOrder};

// Escaping
pub use crate::sanitize::{double_quote, literal, quote, sanitize};

// String-level utilities
pub use crate::utils::{flip_sorting_mode, invert_operator};

// Error types
pub use crate::errors::QueryError;
pub use crate::validation::{ValidatedIdentifier, ValidationError};

// Configuration
pub use config::BuilderConfig;
