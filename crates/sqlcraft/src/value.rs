//! Bound values and the ordered placeholder map produced by a compile.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Normalize for binding: `Null` and the empty string become the SQL
    /// `NULL` literal, booleans become `1`/`0`.
    pub fn normalized(&self) -> Value {
        match self {
            Self::Null => Self::Null,
            Self::Text(s) if s.is_empty() => Self::Null,
            Self::Bool(b) => Self::Int(i64::from(*b)),
            other => other.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{}", i64::from(*b)),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::UInt(n) => serializer.serialize_u64(*n),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

macro_rules! impl_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// `Int` when the value fits, `UInt` above `i64::MAX`.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::UInt(n), Self::Int)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Int(i),
                (None, Some(u)) => Self::UInt(u),
                (None, None) => n.as_f64().map_or_else(|| Self::Text(n.to_string()), Self::Float),
            },
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Ordered placeholder -> value map.
///
/// Entries appear in allocation order, which is also the order the
/// placeholders occur in the compiled text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: String, value: Value) {
        self.entries.push((token, value));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up the value bound to a placeholder token such as `:v1`.
    pub fn get(&self, token: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v)
    }

    /// Number of bound placeholders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(token, value)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v))
    }

    /// Placeholder tokens in allocation order.
    pub fn tokens(&self) -> Vec<&str> {
        self.entries.iter().map(|(t, _)| t.as_str()).collect()
    }

    /// Bound values in allocation order.
    pub fn values(&self) -> Vec<&Value> {
        self.entries.iter().map(|(_, v)| v).collect()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, value) in &self.entries {
            map.serialize_entry(token, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_null_empty_and_bool() {
        assert_eq!(Value::Null.normalized(), Value::Null);
        assert_eq!(Value::from("").normalized(), Value::Null);
        assert_eq!(Value::from(true).normalized(), Value::Int(1));
        assert_eq!(Value::from(false).normalized(), Value::Int(0));
        assert_eq!(Value::from("x").normalized(), Value::Text("x".into()));
        assert_eq!(Value::from(7u8).normalized(), Value::Int(7));
    }

    #[test]
    fn null_displays_as_sql_literal() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::from(None::<i32>).to_string(), "NULL");
    }

    #[test]
    fn converts_json_values() {
        assert_eq!(Value::from(serde_json::json!(3)), Value::Int(3));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(serde_json::json!("a")), Value::Text("a".into()));
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
    }

    #[test]
    fn large_unsigned_keeps_its_value() {
        assert_eq!(Value::from(42u64), Value::Int(42));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_eq!(Value::from(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(Value::from(serde_json::json!(u64::MAX)), Value::UInt(u64::MAX));
    }

    #[test]
    fn params_serialize_in_order() {
        let mut params = Params::new();
        for i in 1..=11 {
            params.push(format!(":v{i}"), Value::Int(i));
        }
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.starts_with(r#"{":v1":1,":v2":2"#));
        assert!(json.ends_with(r#"":v11":11}"#));
        assert_eq!(params.get(":v10"), Some(&Value::Int(10)));
    }
}
