//! Validation module
//!
//! Checks for aliases and other bare identifiers that the checked rendering
//! paths splice into query text.

use std::fmt;
use thiserror::Error;

/// Why an alias was refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("alias is empty")]
    Empty,

    #[error("alias '{0}' is longer than {max} bytes", max = ValidatedIdentifier::MAX_LENGTH)]
    TooLong(String),

    /// Anything outside `[A-Za-z_][A-Za-z0-9_]*`, including a leading digit
    #[error("alias '{0}' must be a letter or underscore followed by letters, digits or underscores")]
    InvalidCharacters(String),

    #[error("alias '{0}' is a reserved SQL keyword")]
    ReservedKeyword(String),
}

/// A bare identifier (alias, CTE name) that is safe to splice into SQL text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedIdentifier(String);

impl ValidatedIdentifier {
    /// PostgreSQL identifier length limit
    pub const MAX_LENGTH: usize = 63;

    /// Create a new validated identifier
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::validate(name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the validated name as a String
    pub fn into_string(self) -> String {
        self.0
    }

    /// Validation rules shared by every identifier check
    pub fn validate(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong(name.to_string()));
        }

        if !has_identifier_shape(name) {
            return Err(ValidationError::InvalidCharacters(name.to_string()));
        }

        if Self::is_reserved_keyword(name) {
            return Err(ValidationError::ReservedKeyword(name.to_string()));
        }

        Ok(())
    }

    /// Check if a name is a reserved SQL keyword
    fn is_reserved_keyword(name: &str) -> bool {
        // Keywords this builder emits, plus the usual statement verbs
        const RESERVED_KEYWORDS: &[&str] = &[
            "SELECT",
            "INSERT",
            "UPDATE",
            "DELETE",
            "FROM",
            "WHERE",
            "JOIN",
            "INNER",
            "LEFT",
            "RIGHT",
            "FULL",
            "OUTER",
            "CROSS",
            "ON",
            "AS",
            "AND",
            "OR",
            "NOT",
            "NULL",
            "IS",
            "TRUE",
            "FALSE",
            "CASE",
            "WHEN",
            "THEN",
            "ELSE",
            "END",
            "EXISTS",
            "IN",
            "LIKE",
            "BETWEEN",
            "ORDER",
            "BY",
            "GROUP",
            "HAVING",
            "LIMIT",
            "OFFSET",
            "UNION",
            "INTERSECT",
            "EXCEPT",
            "ALL",
            "DISTINCT",
            "WITH",
            "RECURSIVE",
            "ASC",
            "DESC",
            "CREATE",
            "DROP",
            "ALTER",
            "TABLE",
            "RETURNING",
        ];

        RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
    }
}

impl fmt::Display for ValidatedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ValidatedIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, with no length or keyword check
pub(crate) fn has_identifier_shape(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Check if a string is a valid identifier without creating a ValidatedIdentifier
pub fn is_valid_identifier(name: &str) -> bool {
    ValidatedIdentifier::validate(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        let valid_names = [
            "users",
            "user_profiles",
            "UserProfiles",
            "_private_table",
            "sq1",
            "a",
            &"a".repeat(63), // Max length
        ];

        for name in valid_names {
            assert!(
                ValidatedIdentifier::new(name).is_ok(),
                "Should accept valid name: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        let test_cases = [
            ("", ValidationError::Empty),
            ("1st", ValidationError::InvalidCharacters("1st".to_string())),
            (
                "user-name",
                ValidationError::InvalidCharacters("user-name".to_string()),
            ),
            (
                "sq alias",
                ValidationError::InvalidCharacters("sq alias".to_string()),
            ),
            (
                "SELECT",
                ValidationError::ReservedKeyword("SELECT".to_string()),
            ),
            ("with", ValidationError::ReservedKeyword("with".to_string())),
        ];

        for (name, expected_error) in test_cases {
            let result = ValidatedIdentifier::new(name);
            assert_eq!(result, Err(expected_error), "Should reject: {}", name);
        }
    }

    #[test]
    fn test_too_long_name() {
        let long_name = "a".repeat(64);

        assert_eq!(
            ValidatedIdentifier::new(&long_name),
            Err(ValidationError::TooLong(long_name.clone()))
        );
    }

    #[test]
    fn test_identifier_shape() {
        assert!(has_identifier_shape("_t1"));
        assert!(has_identifier_shape("select"));
        assert!(!has_identifier_shape(""));
        assert!(!has_identifier_shape("1x"));
        assert!(!has_identifier_shape("a-b"));
    }

    #[test]
    fn test_injection_patterns_rejected() {
        let malicious_names = [
            "sq; DROP TABLE users; --",
            "sq' OR '1'='1",
            "sq/**/UNION/**/SELECT",
            "sq\"; DELETE FROM users; --",
        ];

        for name in malicious_names {
            assert!(!is_valid_identifier(name), "Should reject: {}", name);
        }
    }

    #[test]
    fn test_display_and_accessors() {
        let ident = ValidatedIdentifier::new("recent_orders").unwrap();

        assert_eq!(format!("{}", ident), "recent_orders");
        assert_eq!(ident.as_str(), "recent_orders");
        assert_eq!(ident.into_string(), "recent_orders");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "alias is empty");
        assert_eq!(
            ValidationError::TooLong("x".to_string()).to_string(),
            "alias 'x' is longer than 63 bytes"
        );
        assert_eq!(
            ValidationError::ReservedKeyword("from".to_string()).to_string(),
            "alias 'from' is a reserved SQL keyword"
        );
    }
}
