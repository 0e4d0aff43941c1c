//! Entries: one person's attribute snapshot.

use std::collections::HashMap;

use super::FieldValue;

static UNKNOWN: FieldValue = FieldValue::Unknown;

/// An immutable attribute snapshot subject to grouping.
///
/// # Example
///
/// ```
/// use groupforge_core::{Entry, FieldValue};
///
/// let entry = Entry::new("u1").with("gender", "Male").with("rating", 7.5);
///
/// assert_eq!(entry.id(), "u1");
/// assert_eq!(entry.get("rating").as_number(), Some(7.5));
/// assert_eq!(entry.get("missing"), &FieldValue::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    data: HashMap<String, FieldValue>,
}

impl Entry {
    /// Creates an entry with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: HashMap::new(),
        }
    }

    /// Creates an entry from an existing attribute map.
    pub fn from_data(id: impl Into<String>, data: HashMap<String, FieldValue>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Adds an attribute value.
    pub fn with(mut self, field_id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.data.insert(field_id.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the value for a field, or `Unknown` when absent.
    pub fn get(&self, field_id: &str) -> &FieldValue {
        self.data.get(field_id).unwrap_or(&UNKNOWN)
    }

    pub fn data(&self) -> &HashMap<String, FieldValue> {
        &self.data
    }
}
