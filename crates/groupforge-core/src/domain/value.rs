//! Attribute values carried by entries.

use std::fmt;

/// A single attribute value on an [`Entry`](super::Entry).
///
/// `Unknown` is a meaningful state: it stands for null, a missing field, or
/// a value that cannot be interpreted. Distance and partitioning treat it
/// explicitly rather than failing.
///
/// # Example
///
/// ```
/// use groupforge_core::FieldValue;
///
/// assert_eq!(FieldValue::from(5.0).key_string().as_deref(), Some("5"));
/// assert_eq!(FieldValue::from("").key_string(), None);
/// assert!(FieldValue::Unknown.is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// Null or missing.
    #[default]
    Unknown,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Returns true if this value carries no usable information.
    pub fn is_unknown(&self) -> bool {
        match self {
            FieldValue::Unknown => true,
            FieldValue::Number(n) => !n.is_finite(),
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the numeric value, if this is a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value.
    ///
    /// Text `"true"` / `"false"` (any case) is accepted as well.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
            FieldValue::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// Returns the elements of a list value as strings.
    ///
    /// A scalar value is treated as a single-element list.
    pub fn as_list(&self) -> Option<Vec<String>> {
        match self {
            FieldValue::List(items) => Some(items.clone()),
            other if other.is_unknown() => None,
            other => other.key_string().map(|s| vec![s]),
        }
    }

    /// String coercion used for grouping keys and categorical comparison.
    ///
    /// Returns `None` for unknown values and for values that coerce to the
    /// empty string.
    pub fn key_string(&self) -> Option<String> {
        if self.is_unknown() {
            return None;
        }
        let s = self.to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unknown => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Unknown, Into::into)
    }
}
