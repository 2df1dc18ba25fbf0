//! String-level helpers for callers that keep directions and operators as text.

use crate::query_builder::filter::Operator;
use crate::query_builder::ordering::SortOrder;

/// `ASC` → `DESC`, `DESC` → `ASC`; anything else (case included) → `DESC`
pub fn flip_sorting_mode(mode: &str) -> &'static str {
    match mode.parse::<SortOrder>() {
        Ok(order) => order.flip().to_sql(),
        Err(_) => SortOrder::Desc.to_sql(),
    }
}

/// Flip a comparison operator or boolean test; unrecognized input is returned unchanged
pub fn invert_operator(op: &str) -> &str {
    match op.parse::<Operator>() {
        Ok(operator) => operator.inverse().to_sql(),
        Err(_) => op,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_sorting_mode() {
        assert_eq!(flip_sorting_mode("ASC"), "DESC");
        assert_eq!(flip_sorting_mode("DESC"), "ASC");
        assert_eq!(flip_sorting_mode("anything else"), "DESC");
        assert_eq!(flip_sorting_mode("asc"), "DESC");
        assert_eq!(flip_sorting_mode(""), "DESC");
    }

    #[test]
    fn test_invert_operator_table() {
        let table = [
            (">", "<"),
            ("<", ">"),
            (">=", "<="),
            ("<=", ">="),
            ("=", "!="),
            ("!=", "="),
            ("IS NULL", "IS NOT NULL"),
            ("IS NOT NULL", "IS NULL"),
            ("TRUE", "FALSE"),
            ("FALSE", "TRUE"),
        ];

        for (op, inverted) in table {
            assert_eq!(invert_operator(op), inverted, "op: {}", op);
        }
    }

    #[test]
    fn test_invert_operator_passthrough() {
        assert_eq!(invert_operator("LIKE"), "LIKE");
        assert_eq!(invert_operator("<>"), "<>");
        assert_eq!(invert_operator(" = "), " = ");
        assert_eq!(invert_operator("is null"), "is null");
    }
}
