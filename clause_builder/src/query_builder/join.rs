use crate::query_builder::builder::QueryBuilder;
use std::fmt;

/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
    /// RIGHT JOIN - returns all records from the right table and matched records from the left table
    Right,
    /// FULL JOIN - returns all records when there is a match in either left or right table
    Full,
    /// Any other keyword placed before `JOIN`, e.g. `LEFT OUTER` or `NATURAL`
    Custom(String),
}

impl JoinType {
    /// The keyword that precedes `JOIN`
    pub fn keyword(&self) -> &str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
            JoinType::Custom(keyword) => keyword,
        }
    }
}

impl From<&str> for JoinType {
    fn from(keyword: &str) -> Self {
        match keyword {
            "INNER" => JoinType::Inner,
            "LEFT" => JoinType::Left,
            "RIGHT" => JoinType::Right,
            "FULL" => JoinType::Full,
            other => JoinType::Custom(other.to_string()),
        }
    }
}

/// Represents a complete JOIN clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    /// Type of join (INNER, LEFT, etc.)
    pub join_type: JoinType,
    /// Table, or a rendered subquery, to join with
    pub table: String,
    /// The ON condition, spliced verbatim
    pub on: String,
}

impl JoinClause {
    pub fn new(join_type: JoinType, table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            join_type,
            table: table.into(),
            on: on.into(),
        }
    }
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} JOIN {} ON {}",
            self.join_type.keyword(),
            self.table,
            self.on
        )
    }
}

impl QueryBuilder {
    /// Add a `<KIND> JOIN <table> ON <on>` clause; joins render in call order
    pub fn join(
        mut self,
        join_type: impl Into<JoinType>,
        table: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.joins.push(JoinClause::new(join_type.into(), table, on));
        self
    }

    pub fn inner_join(self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join(JoinType::Inner, table, on)
    }

    pub fn left_join(self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join(JoinType::Left, table, on)
    }

    pub fn right_join(self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join(JoinType::Right, table, on)
    }

    pub fn full_join(self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join(JoinType::Full, table, on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type_keyword() {
        assert_eq!(JoinType::Inner.keyword(), "INNER");
        assert_eq!(JoinType::Left.keyword(), "LEFT");
        assert_eq!(JoinType::Right.keyword(), "RIGHT");
        assert_eq!(JoinType::Full.keyword(), "FULL");
        assert_eq!(JoinType::Custom("LEFT OUTER".into()).keyword(), "LEFT OUTER");
    }

    #[test]
    fn test_join_type_from_str() {
        assert_eq!(JoinType::from("LEFT"), JoinType::Left);
        assert_eq!(JoinType::from("NATURAL"), JoinType::Custom("NATURAL".to_string()));
    }

    #[test]
    fn test_join_clause_display() {
        let join = JoinClause::new(JoinType::Inner, "orders", "orders.user_id = users.id");
        assert_eq!(join.to_string(), "INNER JOIN orders ON orders.user_id = users.id");
    }

    #[test]
    fn test_join_helpers_record_in_call_order() {
        let builder = QueryBuilder::new()
            .left_join("a", "a.id = t.a_id")
            .join("CROSS", "b", "TRUE")
            .right_join("c", "c.id = t.c_id");

        let kinds: Vec<&str> = builder.joins.iter().map(|j| j.join_type.keyword()).collect();
        assert_eq!(kinds, ["LEFT", "CROSS", "RIGHT"]);
    }
}
