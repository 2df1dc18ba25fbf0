//! Quote escaping for values and identifiers spliced into query text.
//!
//! Escaping here is quote doubling only. Dialects that honour backslash
//! escapes need more than this; prefer bound parameters at the driver.

use serde_json::Value;

/// Double every single quote: `O'Brien` becomes `O''Brien`.
pub fn sanitize(source: &str) -> String {
    source.replace('\'', "''")
}

/// Sanitize and wrap in single quotes, for literal values.
pub fn quote(source: &str) -> String {
    format!("'{}'", sanitize(source))
}

/// Sanitize, double every embedded double quote and wrap in double quotes,
/// for identifiers.
pub fn double_quote(source: &str) -> String {
    format!("\"{}\"", sanitize(source).replace('"', "\"\""))
}

/// Render a JSON value as an SQL literal.
pub fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote(text),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("ARRAY[{}]", items.join(", "))
        }
        // Objects go in as their JSON text
        Value::Object(_) => quote(&value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_only_touches_single_quotes() {
        assert_eq!(sanitize("O'Brien"), "O''Brien");
        assert_eq!(sanitize("''"), "''''");
        assert_eq!(sanitize(r#"back\slash "dq" 100%"#), r#"back\slash "dq" 100%"#);
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("abc"), "'abc'");
        assert_eq!(quote("it's"), "'it''s'");
        assert_eq!(quote("'; DROP TABLE users; --"), "''''; DROP TABLE users; --'");
    }

    #[test]
    fn test_double_quote() {
        assert_eq!(double_quote("CamelCase"), "\"CamelCase\"");
        assert_eq!(double_quote("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(double_quote("it's"), "\"it''s\"");
    }

    #[test]
    fn test_literal() {
        assert_eq!(literal(&json!(null)), "NULL");
        assert_eq!(literal(&json!(true)), "TRUE");
        assert_eq!(literal(&json!(false)), "FALSE");
        assert_eq!(literal(&json!(42)), "42");
        assert_eq!(literal(&json!(-1.5)), "-1.5");
        assert_eq!(literal(&json!("it's")), "'it''s'");
        assert_eq!(literal(&json!([1, "a", null])), "ARRAY[1, 'a', NULL]");
        assert_eq!(literal(&json!({"k": "v"})), r#"'{"k":"v"}'"#);
    }
}
