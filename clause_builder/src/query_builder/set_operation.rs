//! UNION / INTERSECT / EXCEPT against pre-rendered query text.

use crate::query_builder::builder::QueryBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    Except,
}

impl SetOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SetOperator::Union => "UNION",
            SetOperator::UnionAll => "UNION ALL",
            SetOperator::Intersect => "INTERSECT",
            SetOperator::Except => "EXCEPT",
        }
    }
}

impl QueryBuilder {
    /// Append `UNION <other>`; `other` is usually another builder's `build()`
    pub fn union(self, other: impl Into<String>) -> Self {
        self.combine(SetOperator::Union, other)
    }

    pub fn union_all(self, other: impl Into<String>) -> Self {
        self.combine(SetOperator::UnionAll, other)
    }

    pub fn intersect(self, other: impl Into<String>) -> Self {
        self.combine(SetOperator::Intersect, other)
    }

    pub fn except(self, other: impl Into<String>) -> Self {
        self.combine(SetOperator::Except, other)
    }

    pub fn combine(mut self, operator: SetOperator, other: impl Into<String>) -> Self {
        self.combinations.push((operator, other.into()));
        self
    }
}
