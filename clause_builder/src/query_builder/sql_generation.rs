//! SQL text generation
//!
//! Renders each clause accumulator of a [`QueryBuilder`] and concatenates
//! them in canonical order.

use crate::query_builder::builder::QueryBuilder;
use crate::query_builder::cte::CommonTableExpression;
use crate::query_builder::filter::LogicalOperator;
use crate::query_builder::join::JoinClause;
use crate::query_builder::set_operation::SetOperator;
use crate::sanitize::double_quote;
use crate::validation::has_identifier_shape;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Render a whole builder: every present clause followed by one space
    pub fn render(builder: &QueryBuilder) -> String {
        let clauses = [
            Self::build_cte_clause(&builder.ctes),
            Self::build_select_clause(&builder.selects, builder.quote_identifiers),
            Self::build_from_clause(builder.from.as_deref(), builder.quote_identifiers),
            Self::build_join_clause(&builder.joins),
            Self::build_where_clause(&builder.conditions),
            Self::build_combine_clause(&builder.combinations),
            Self::build_group_by_clause(&builder.group_by),
            Self::build_order_clause(&builder.order_by),
        ];

        let mut sql = String::new();
        for clause in clauses.iter().filter(|clause| !clause.is_empty()) {
            sql.push_str(clause);
            sql.push(' ');
        }
        sql.push_str(&builder.pagination.to_sql());
        sql
    }

    /// Build WITH clause
    pub fn build_cte_clause(ctes: &[CommonTableExpression]) -> String {
        if ctes.is_empty() {
            return "".to_string();
        }

        let items: Vec<String> = ctes.iter().map(|cte| cte.to_string()).collect();
        format!("WITH {}", items.join(", "))
    }

    /// Build SELECT clause
    pub fn build_select_clause(columns: &[String], quote: bool) -> String {
        if columns.is_empty() {
            return "".to_string();
        }

        let columns: Vec<String> = columns
            .iter()
            .map(|column| Self::identifier(column, quote))
            .collect();
        format!("SELECT {}", columns.join(", "))
    }

    /// Build FROM clause
    pub fn build_from_clause(table: Option<&str>, quote: bool) -> String {
        match table {
            Some(table) => format!("FROM {}", Self::identifier(table, quote)),
            None => "".to_string(),
        }
    }

    /// Build JOIN clauses
    pub fn build_join_clause(joins: &[JoinClause]) -> String {
        joins
            .iter()
            .map(|join| join.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build WHERE clause; the operator of the first condition is dropped
    pub fn build_where_clause(conditions: &[(LogicalOperator, String)]) -> String {
        let mut clause = String::new();

        for (i, (operator, condition)) in conditions.iter().enumerate() {
            if i == 0 {
                clause.push_str("WHERE ");
            } else {
                clause.push(' ');
                clause.push_str(operator.to_sql());
                clause.push(' ');
            }
            clause.push_str(condition);
        }

        clause
    }

    /// Build UNION/INTERSECT/EXCEPT chain
    pub fn build_combine_clause(combinations: &[(SetOperator, String)]) -> String {
        combinations
            .iter()
            .map(|(operator, query)| format!("{} {}", operator.to_sql(), query.trim_end()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build GROUP BY clause
    pub fn build_group_by_clause(group_by: &[String]) -> String {
        if group_by.is_empty() {
            return "".to_string();
        }

        format!("GROUP BY {}", group_by.join(", "))
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[(String, String)]) -> String {
        if order_by.is_empty() {
            return "".to_string();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(expr, direction)| format!("{} {}", expr, direction))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// `( <text> )` with trailing whitespace of `text` removed
    pub fn parenthesize(text: &str) -> String {
        format!("( {} )", text.trim_end())
    }

    fn identifier(name: &str, quote: bool) -> String {
        if !quote || !Self::is_bare_name(name) {
            return name.to_string();
        }

        name.split('.')
            .map(|part| if part == "*" { part.to_string() } else { double_quote(part) })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Dotted path of plain names, optionally ending in `*`: `schema.table`, `t.*`.
    ///
    /// Numbers and literal keywords such as `NULL` are values, not names.
    fn is_bare_name(name: &str) -> bool {
        const LITERAL_KEYWORDS: &[&str] = &[
            "NULL",
            "TRUE",
            "FALSE",
            "DEFAULT",
            "CURRENT_DATE",
            "CURRENT_TIME",
            "CURRENT_TIMESTAMP",
            "CURRENT_USER",
            "LOCALTIME",
            "LOCALTIMESTAMP",
        ];

        if name == "*" {
            return false;
        }
        let parts: Vec<&str> = name.split('.').collect();
        let last = parts.len() - 1;
        parts.iter().enumerate().all(|(i, part)| {
            (i == last && *part == "*")
                || (has_identifier_shape(part)
                    && !LITERAL_KEYWORDS
                        .iter()
                        .any(|keyword| keyword.eq_ignore_ascii_case(part)))
        })
    }
}
