//! Typed driver option values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A driver option taken from a URL query string or supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// `true` / `false`.
    Bool(bool),
    /// An all-digit value.
    Integer(i64),
    /// Anything else.
    String(String),
    /// A nested option group, e.g. MySQL's `ssl` dictionary.
    Map(IndexMap<String, OptionValue>),
}

impl OptionValue {
    /// Type a raw query-string value.
    ///
    /// Exactly `true` or `false` become booleans, ASCII digit runs that fit
    /// in an `i64` become integers, and everything else stays a string.
    ///
    /// ```rust
    /// use dburl_config::OptionValue;
    ///
    /// assert_eq!(OptionValue::coerce("true"), OptionValue::Bool(true));
    /// assert_eq!(OptionValue::coerce("10"), OptionValue::Integer(10));
    /// assert_eq!(OptionValue::coerce("require"), OptionValue::from("require"));
    /// ```
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => raw
                .parse()
                .map(Self::Integer)
                .unwrap_or_else(|_| Self::String(raw.to_string())),
            _ => Self::String(raw.to_string()),
        }
    }

    /// Get the value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the nested option group.
    pub fn as_map(&self) -> Option<&IndexMap<String, OptionValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::String(s) => f.write_str(s),
            Self::Map(m) => {
                f.write_str("{")?;
                for (i, (key, value)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<IndexMap<String, OptionValue>> for OptionValue {
    fn from(m: IndexMap<String, OptionValue>) -> Self {
        Self::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_bool() {
        assert_eq!(OptionValue::coerce("true"), OptionValue::Bool(true));
        assert_eq!(OptionValue::coerce("false"), OptionValue::Bool(false));
        // Only the exact lowercase tokens.
        assert_eq!(OptionValue::coerce("True"), OptionValue::from("True"));
        assert_eq!(OptionValue::coerce("1"), OptionValue::Integer(1));
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(OptionValue::coerce("0"), OptionValue::Integer(0));
        assert_eq!(OptionValue::coerce("5432"), OptionValue::Integer(5432));
        assert_eq!(OptionValue::coerce("-1"), OptionValue::from("-1"));
        assert_eq!(OptionValue::coerce("1.5"), OptionValue::from("1.5"));
        assert_eq!(OptionValue::coerce("10s"), OptionValue::from("10s"));
    }

    #[test]
    fn test_coerce_overflow_stays_string() {
        let raw = "99999999999999999999999";
        assert_eq!(OptionValue::coerce(raw), OptionValue::from(raw));
    }

    #[test]
    fn test_coerce_empty() {
        assert_eq!(OptionValue::coerce(""), OptionValue::from(""));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(OptionValue::Bool(true).as_bool(), Some(true));
        assert_eq!(OptionValue::Integer(3).as_i64(), Some(3));
        assert_eq!(OptionValue::from("x").as_str(), Some("x"));
        assert_eq!(OptionValue::from("x").as_bool(), None);
    }

    #[test]
    fn test_display() {
        let mut ssl = IndexMap::new();
        ssl.insert("ca".to_string(), OptionValue::from("/etc/ca.pem"));
        assert_eq!(OptionValue::Map(ssl).to_string(), "{ca: /etc/ca.pem}");
        assert_eq!(OptionValue::Integer(7).to_string(), "7");
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&OptionValue::Bool(true)).unwrap();
        assert_eq!(json, "true");
        let value: OptionValue = serde_json::from_str("10").unwrap();
        assert_eq!(value, OptionValue::Integer(10));
        let value: OptionValue = serde_json::from_str("{\"ca\": \"x\"}").unwrap();
        assert_eq!(value.as_map().and_then(|m| m.get("ca")), Some(&OptionValue::from("x")));
    }
}
