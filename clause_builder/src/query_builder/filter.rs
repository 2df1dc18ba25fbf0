//! WHERE support
//!
//! Condition fragments are spliced in verbatim. Nothing here escapes values:
//! run caller data through [`crate::sanitize::quote`] (or bind it at the
//! driver) before formatting it into a condition.

use crate::query_builder::builder::QueryBuilder;
use std::fmt;
use std::str::FromStr;

/// Logical operators for combining conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

/// Comparison operators and boolean tests covered by the flip table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Gt,        // >
    Lt,        // <
    Gte,       // >=
    Lte,       // <=
    Eq,        // =
    Ne,        // !=
    IsNull,    // IS NULL
    IsNotNull, // IS NOT NULL
    True,      // TRUE
    False,     // FALSE
}

impl Operator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::True => "TRUE",
            Operator::False => "FALSE",
        }
    }

    /// The mirrored operator from the flip table (`>` to `<`, `=` to `!=`, `IS NULL` to `IS NOT NULL`).
    ///
    /// This is not a logical negation: `>` maps to `<`, not `<=`.
    pub fn inverse(self) -> Self {
        match self {
            Operator::Gt => Operator::Lt,
            Operator::Lt => Operator::Gt,
            Operator::Gte => Operator::Lte,
            Operator::Lte => Operator::Gte,
            Operator::Eq => Operator::Ne,
            Operator::Ne => Operator::Eq,
            Operator::IsNull => Operator::IsNotNull,
            Operator::IsNotNull => Operator::IsNull,
            Operator::True => Operator::False,
            Operator::False => Operator::True,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            ">=" => Ok(Operator::Gte),
            "<=" => Ok(Operator::Lte),
            "=" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            "IS NULL" => Ok(Operator::IsNull),
            "IS NOT NULL" => Ok(Operator::IsNotNull),
            "TRUE" => Ok(Operator::True),
            "FALSE" => Ok(Operator::False),
            other => Err(format!("Unknown operator: {}", other)),
        }
    }
}

impl QueryBuilder {
    /// Add a condition joined with `AND` (the first condition opens `WHERE`).
    ///
    /// Template with `format_args!` or `format!`; values are not escaped.
    ///
    /// ```
    /// use clause_builder::{quote, QueryBuilder};
    ///
    /// let name = "O'Brien";
    /// let sql = QueryBuilder::new()
    ///     .select(["id"])
    ///     .from("users")
    ///     .and_where(format_args!("name = {}", quote(name)))
    ///     .build();
    /// assert_eq!(sql, "SELECT id FROM users WHERE name = 'O''Brien' ");
    /// ```
    pub fn and_where(self, condition: impl fmt::Display) -> Self {
        self.push_condition(LogicalOperator::And, condition)
    }

    /// Add a condition joined with `OR` (the first condition opens `WHERE`).
    ///
    /// Conditions are not grouped: `a AND b OR c` stays flat. Use
    /// [`condition`](crate::query_builder::condition::condition) for parentheses.
    pub fn or_where(self, condition: impl fmt::Display) -> Self {
        self.push_condition(LogicalOperator::Or, condition)
    }

    fn push_condition(mut self, operator: LogicalOperator, condition: impl fmt::Display) -> Self {
        self.conditions.push((operator, condition.to_string()));
        self
    }
}
