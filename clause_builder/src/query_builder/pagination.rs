//! OFFSET / LIMIT support

use crate::query_builder::builder::QueryBuilder;

/// Pagination configuration; zero means "not set"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.offset == 0 && self.limit == 0
    }

    /// `OFFSET n LIMIT m `, each part only when non-zero, always in that order
    pub fn to_sql(&self) -> String {
        let mut clause = String::new();

        if self.offset > 0 {
            clause.push_str(&format!("OFFSET {} ", self.offset));
        }

        if self.limit > 0 {
            clause.push_str(&format!("LIMIT {} ", self.limit));
        }

        clause
    }
}

impl QueryBuilder {
    /// Set the row offset, replacing any previous value; 0 clears it
    pub fn offset(mut self, offset: u64) -> Self {
        self.pagination.offset = offset;
        self
    }

    /// Set the row limit, replacing any previous value; 0 clears it
    pub fn limit(mut self, limit: u64) -> Self {
        self.pagination.limit = limit;
        self
    }
}
