use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Query is empty: no clause has been added")]
    EmptyQuery,

    #[error("JOIN clause requires a FROM target")]
    JoinWithoutFrom,

    #[error("LIMIT {limit} exceeds configured maximum of {max}")]
    LimitExceeded { limit: u64, max: u64 },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),
}
