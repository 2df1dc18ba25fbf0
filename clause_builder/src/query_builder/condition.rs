//! Parenthesized AND/OR groups for embedding in a WHERE clause.

use crate::query_builder::filter::LogicalOperator;
use std::fmt;

/// Accumulates condition fragments and renders them as `( a AND b OR c )`.
///
/// The joining operator of the first fragment is never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionBuilder {
    fragments: Vec<(LogicalOperator, String)>,
}

impl ConditionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment joined with ` AND `
    pub fn and(mut self, fragment: impl fmt::Display) -> Self {
        self.fragments.push((LogicalOperator::And, fragment.to_string()));
        self
    }

    /// Append a fragment joined with ` OR `
    pub fn or(mut self, fragment: impl fmt::Display) -> Self {
        self.fragments.push((LogicalOperator::Or, fragment.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Display for ConditionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("( ")?;
        for (i, (operator, fragment)) in self.fragments.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", operator.to_sql())?;
            }
            f.write_str(fragment)?;
        }
        f.write_str(" )")
    }
}

/// Configure a fresh [`ConditionBuilder`] and render it.
///
/// ```
/// use clause_builder::condition;
///
/// let sql = condition(|c| {
///     c.or("a = 1")
///         .or("b > 10")
///         .or(condition(|c| c.and("c = 0").and("d = 0")))
/// });
/// assert_eq!(sql, "( a = 1 OR b > 10 OR ( c = 0 AND d = 0 ) )");
/// ```
pub fn condition<F>(configure: F) -> String
where
    F: FnOnce(ConditionBuilder) -> ConditionBuilder,
{
    configure(ConditionBuilder::new()).to_string()
}
