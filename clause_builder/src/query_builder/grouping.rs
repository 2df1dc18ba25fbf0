use crate::query_builder::builder::QueryBuilder;

impl QueryBuilder {
    /// Add a GROUP BY expression; repeated calls are comma-joined
    pub fn group_by(mut self, expr: impl Into<String>) -> Self {
        self.group_by.push(expr.into());
        self
    }
}
