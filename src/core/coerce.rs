//! Property value coercion.
//!
//! Turns the raw string a caller sends for a property write into a typed
//! value. The rules are applied in order, first match wins:
//!
//! 1. `t`, `f`, `true`, `false` (ASCII case-insensitive) -> [`PropertyValue::Bool`]
//! 2. one or more ASCII digits that fit in an `i64` -> [`PropertyValue::Int`]
//! 3. anything else, including the empty string -> [`PropertyValue::Text`]
//!
//! A leading `-` never matches rule 2, so negative numbers stay text.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static BOOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:t|f|true|false)$").expect("static regex"));

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static regex"));

/// Typed value for a property write.
///
/// Serializes to the matching JSON scalar, which is what the player expects
/// in a `set_property` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl PropertyValue {
    /// Infer a value from a raw string. Never fails.
    pub fn coerce(raw: &str) -> Self {
        if BOOL_RE.is_match(raw) {
            let first = raw.as_bytes()[0].to_ascii_lowercase();
            return PropertyValue::Bool(first == b't');
        }

        if INT_RE.is_match(raw) {
            // Digit strings past i64::MAX are kept verbatim
            if let Ok(n) = raw.parse::<i64>() {
                return PropertyValue::Int(n);
            }
        }

        PropertyValue::Text(raw.to_string())
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(n) => write!(f, "{}", n),
            PropertyValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Shorthand for [`PropertyValue::coerce`].
pub fn coerce(raw: &str) -> PropertyValue {
    PropertyValue::coerce(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_literals() {
        assert_eq!(coerce("true"), PropertyValue::Bool(true));
        assert_eq!(coerce("t"), PropertyValue::Bool(true));
        assert_eq!(coerce("false"), PropertyValue::Bool(false));
        assert_eq!(coerce("f"), PropertyValue::Bool(false));
    }

    #[test]
    fn test_bool_case_insensitive() {
        assert_eq!(coerce("TRUE"), PropertyValue::Bool(true));
        assert_eq!(coerce("False"), PropertyValue::Bool(false));
        assert_eq!(coerce("T"), PropertyValue::Bool(true));
    }

    #[test]
    fn test_bool_needs_whole_match() {
        assert_eq!(coerce("truthy"), PropertyValue::Text("truthy".into()));
        assert_eq!(coerce("yes"), PropertyValue::Text("yes".into()));
        assert_eq!(coerce(" true"), PropertyValue::Text(" true".into()));
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce("42"), PropertyValue::Int(42));
        assert_eq!(coerce("0"), PropertyValue::Int(0));
        assert_eq!(coerce("007"), PropertyValue::Int(7));
    }

    #[test]
    fn test_non_integers_fall_through() {
        assert_eq!(coerce("42abc"), PropertyValue::Text("42abc".into()));
        assert_eq!(coerce("-5"), PropertyValue::Text("-5".into()));
        assert_eq!(coerce("1.5"), PropertyValue::Text("1.5".into()));
        // Non-ASCII digits are not numbers here
        assert_eq!(coerce("٣"), PropertyValue::Text("٣".into()));
    }

    #[test]
    fn test_overflow_stays_text() {
        let big = "99999999999999999999";
        assert_eq!(coerce(big), PropertyValue::Text(big.into()));
        assert_eq!(coerce("9223372036854775807"), PropertyValue::Int(i64::MAX));
    }

    #[test]
    fn test_empty_is_text() {
        assert_eq!(coerce(""), PropertyValue::Text(String::new()));
    }

    #[test]
    fn test_serializes_as_json_scalar() {
        assert_eq!(serde_json::to_string(&coerce("t")).unwrap(), "true");
        assert_eq!(serde_json::to_string(&coerce("55")).unwrap(), "55");
        assert_eq!(serde_json::to_string(&coerce("yes")).unwrap(), "\"yes\"");
    }
}
