//! Query builder
//!
//! Holds one accumulator per clause kind; [`QueryBuilder::build`] renders them
//! in canonical order through [`SqlGenerator`].

use crate::errors::QueryError;
use crate::query_builder::cte::CommonTableExpression;
use crate::query_builder::filter::LogicalOperator;
use crate::query_builder::join::JoinClause;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::set_operation::SetOperator;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::validation::ValidatedIdentifier;
use config::BuilderConfig;

/// Fluent SQL text builder.
///
/// Every clause method consumes and returns the builder, so calls chain. No
/// method inspects the SQL it is given; malformed fragments only surface when
/// the rendered text is executed.
///
/// ```
/// use clause_builder::QueryBuilder;
///
/// let sql = QueryBuilder::new()
///     .select(["one", "two"])
///     .from("some_table")
///     .inner_join("other_table", "other_table.id = some_table.other_id")
///     .build();
/// assert_eq!(
///     sql,
///     "SELECT one, two FROM some_table INNER JOIN other_table ON other_table.id = some_table.other_id "
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pub(crate) ctes: Vec<CommonTableExpression>,
    pub(crate) selects: Vec<String>,
    pub(crate) from: Option<String>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Vec<(LogicalOperator, String)>,
    pub(crate) combinations: Vec<(SetOperator, String)>,
    pub(crate) group_by: Vec<String>,
    pub(crate) order_by: Vec<(String, String)>,
    pub(crate) pagination: Pagination,
    pub(crate) quote_identifiers: bool,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with configured defaults (identifier quoting, default limit)
    pub fn from_config(config: &BuilderConfig) -> Self {
        Self {
            quote_identifiers: config.quote_identifiers,
            pagination: Pagination::new().with_limit(config.default_limit),
            ..Self::default()
        }
    }

    /// Render SELECT columns and the FROM target as double-quoted identifiers.
    ///
    /// Only bare names (letters, digits, `_`, dotted paths) are quoted;
    /// `*`, expressions and subqueries pass through unchanged.
    pub fn quote_identifiers(mut self, enabled: bool) -> Self {
        self.quote_identifiers = enabled;
        self
    }

    /// Fresh builder for nested queries, sharing this builder's rendering options
    pub(crate) fn child(&self) -> Self {
        Self {
            quote_identifiers: self.quote_identifiers,
            ..Self::default()
        }
    }

    /// Add columns to the select list; repeated calls extend it
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selects.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Set the FROM target. Replaces any previous target rather than adding one.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = Some(table.into());
        self
    }

    /// Independent deep copy; equivalent to `clone()`
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// True when no clause has been added
    pub fn is_empty(&self) -> bool {
        self.ctes.is_empty()
            && self.selects.is_empty()
            && self.from.is_none()
            && self.joins.is_empty()
            && self.conditions.is_empty()
            && self.combinations.is_empty()
            && self.group_by.is_empty()
            && self.order_by.is_empty()
            && self.pagination.is_empty()
    }

    /// Render the query text.
    ///
    /// Clause order is CTEs, SELECT, FROM, JOINs, WHERE, set operations,
    /// GROUP BY, ORDER BY, OFFSET, LIMIT regardless of call order. Each clause
    /// is followed by one space. The builder is left untouched, so repeated
    /// calls return the same text.
    pub fn build(&self) -> String {
        let sql = SqlGenerator::render(self);
        trace_log!("[QUERY_BUILDER] SQL: {}", sql);
        sql
    }

    /// Render after checking for structural mistakes: an empty builder, JOINs
    /// without a FROM target, or CTE aliases that are not plain identifiers.
    pub fn try_build(&self) -> Result<String, QueryError> {
        self.check().map_err(|err| {
            debug_log!("[QUERY_BUILDER] rejected query: {}", err);
            err
        })?;
        Ok(self.build())
    }

    /// [`try_build`](Self::try_build) plus the configured limit policy
    pub fn try_build_with(&self, config: &BuilderConfig) -> Result<String, QueryError> {
        let limit = self.pagination.limit;
        if !config.allows_limit(limit) {
            debug_log!(
                "[QUERY_BUILDER] LIMIT {} over configured max {}",
                limit,
                config.max_limit
            );
            return Err(QueryError::LimitExceeded {
                limit,
                max: config.max_limit,
            });
        }
        self.try_build()
    }

    fn check(&self) -> Result<(), QueryError> {
        if self.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        if !self.joins.is_empty() && self.from.is_none() {
            return Err(QueryError::JoinWithoutFrom);
        }

        for cte in &self.ctes {
            ValidatedIdentifier::validate(&cte.alias)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_is_empty() {
        let builder = QueryBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_select_extends_and_ignores_empty_input() {
        let builder = QueryBuilder::new()
            .select(["a", "b"])
            .select(Vec::<String>::new())
            .select(vec![String::from("c")]);

        assert_eq!(builder.selects, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_overwrites() {
        let builder = QueryBuilder::new().from("a").from("b");
        assert_eq!(builder.from.as_deref(), Some("b"));
    }

    #[test]
    fn test_from_config() {
        let builder = QueryBuilder::from_config(&BuilderConfig::new(true, 25, 100));

        assert!(builder.quote_identifiers);
        assert_eq!(builder.pagination.limit, 25);
        assert_eq!(builder.build(), "LIMIT 25 ");
    }

    #[test]
    fn test_child_only_keeps_options() {
        let parent = QueryBuilder::new()
            .quote_identifiers(true)
            .select(["a"])
            .limit(3);
        let child = parent.child();

        assert!(child.quote_identifiers);
        assert!(child.is_empty());
    }

    #[test]
    fn test_try_build_checks() {
        assert_eq!(QueryBuilder::new().try_build(), Err(QueryError::EmptyQuery));

        assert_eq!(
            QueryBuilder::new()
                .select(["a"])
                .inner_join("b", "b.id = a.b_id")
                .try_build(),
            Err(QueryError::JoinWithoutFrom)
        );

        assert!(matches!(
            QueryBuilder::new()
                .with_str("bad alias", "SELECT 1")
                .select(["*"])
                .from("x")
                .try_build(),
            Err(QueryError::InvalidIdentifier(_))
        ));

        assert_eq!(
            QueryBuilder::new().select(["1"]).try_build().unwrap(),
            "SELECT 1 "
        );
    }

    #[test]
    fn test_try_build_with_limit_policy() {
        let config = BuilderConfig::new(false, 0, 100);
        let builder = QueryBuilder::new().select(["a"]).from("t");

        assert!(builder.clone().limit(100).try_build_with(&config).is_ok());
        assert_eq!(
            builder.clone().limit(101).try_build_with(&config),
            Err(QueryError::LimitExceeded { limit: 101, max: 100 })
        );
        // unset limit is always allowed
        assert!(builder.try_build_with(&config).is_ok());
    }
}
