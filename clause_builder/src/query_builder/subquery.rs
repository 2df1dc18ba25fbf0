//! Rendering a builder as an aliased subquery: `( ... ) AS alias`.

use crate::errors::QueryError;
use crate::query_builder::builder::QueryBuilder;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::validation::ValidatedIdentifier;

impl QueryBuilder {
    /// Render as `( <sql> ) AS <alias>` for use as a FROM or JOIN target
    pub fn sub_query_string(&self, alias: &str) -> String {
        format!("{} AS {}", SqlGenerator::parenthesize(&self.build()), alias)
    }

    /// Like [`sub_query_string`](Self::sub_query_string), rejecting aliases
    /// that are not plain identifiers and queries that fail [`try_build`](Self::try_build)
    pub fn try_sub_query_string(&self, alias: &str) -> Result<String, QueryError> {
        let alias = ValidatedIdentifier::new(alias)?;
        let sql = self.try_build()?;
        Ok(format!("{} AS {}", SqlGenerator::parenthesize(&sql), alias))
    }
}

/// Configure a fresh builder and render it as an aliased subquery.
///
/// ```
/// use clause_builder::{sub, QueryBuilder};
///
/// let sql = QueryBuilder::new()
///     .select(["one"])
///     .from("some_table")
///     .inner_join(
///         sub("sq", |q| q.select(["sqcol"]).from("sqtable").limit(1)),
///         "sq.sqcol = some_table.one",
///     )
///     .build();
/// assert_eq!(
///     sql,
///     "SELECT one FROM some_table INNER JOIN ( SELECT sqcol FROM sqtable LIMIT 1 ) AS sq ON sq.sqcol = some_table.one "
/// );
/// ```
pub fn sub<F>(alias: &str, configure: F) -> String
where
    F: FnOnce(QueryBuilder) -> QueryBuilder,
{
    configure(QueryBuilder::new()).sub_query_string(alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_sub_query_string() {
        let builder = QueryBuilder::new()
            .select(["sqcol"])
            .from("sqtable")
            .and_where("sqcol2 = 'abc'")
            .limit(1);

        assert_eq!(
            builder.sub_query_string("sq"),
            "( SELECT sqcol FROM sqtable WHERE sqcol2 = 'abc' LIMIT 1 ) AS sq"
        );
    }

    #[test]
    fn test_sub_query_string_does_not_consume() {
        let builder = QueryBuilder::new().select(["1"]);
        let first = builder.sub_query_string("a");
        let second = builder.sub_query_string("a");
        assert_eq!(first, second);
        assert_eq!(builder.build(), "SELECT 1 ");
    }

    #[test]
    fn test_try_sub_query_string_rejects_bad_alias() {
        let builder = QueryBuilder::new().select(["1"]);

        assert_eq!(
            builder.try_sub_query_string("x; DROP TABLE t"),
            Err(QueryError::InvalidIdentifier(ValidationError::InvalidCharacters(
                "x; DROP TABLE t".to_string()
            )))
        );
        assert_eq!(builder.try_sub_query_string("sq").unwrap(), "( SELECT 1 ) AS sq");
    }

    #[test]
    fn test_try_sub_query_string_rejects_empty_query() {
        assert_eq!(
            QueryBuilder::new().try_sub_query_string("sq"),
            Err(QueryError::EmptyQuery)
        );
    }
}
