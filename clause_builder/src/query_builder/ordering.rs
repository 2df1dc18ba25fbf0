//! ORDER BY support
//!
//! Sort directions and the `order_by` clause method.

use crate::query_builder::builder::QueryBuilder;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// The opposite direction
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    /// Exact match on `ASC` / `DESC`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

impl QueryBuilder {
    /// Add an ORDER BY entry; repeated calls are comma-joined in call order.
    ///
    /// `direction` is rendered verbatim, so both [`SortOrder`] and raw strings
    /// such as `"DESC NULLS LAST"` work.
    pub fn order_by(mut self, expr: impl Into<String>, direction: impl fmt::Display) -> Self {
        self.order_by.push((expr.into(), direction.to_string()));
        self
    }
}
