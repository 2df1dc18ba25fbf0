//! Common table expressions (`WITH alias AS ( ... )`).

use crate::query_builder::builder::QueryBuilder;
use crate::query_builder::sql_generation::SqlGenerator;
use std::fmt;

/// One named entry of a WITH clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonTableExpression {
    pub alias: String,
    /// Rendered body without surrounding parentheses
    pub body: String,
}

impl CommonTableExpression {
    pub fn new(alias: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for CommonTableExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AS {}", self.alias, SqlGenerator::parenthesize(&self.body))
    }
}

impl QueryBuilder {
    /// Add a CTE built by `configure` on a fresh child builder.
    ///
    /// ```
    /// use clause_builder::QueryBuilder;
    ///
    /// let sql = QueryBuilder::new()
    ///     .with("recent", |q| q.select(["id"]).from("orders").limit(10))
    ///     .select(["*"])
    ///     .from("recent")
    ///     .build();
    /// assert_eq!(
    ///     sql,
    ///     "WITH recent AS ( SELECT id FROM orders LIMIT 10 ) SELECT * FROM recent "
    /// );
    /// ```
    pub fn with<F>(self, alias: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        let body = configure(self.child()).build();
        self.with_str(alias, body)
    }

    /// Add a CTE from already rendered query text
    pub fn with_str(mut self, alias: impl Into<String>, query: impl Into<String>) -> Self {
        self.ctes.push(CommonTableExpression::new(alias, query));
        self
    }
}
