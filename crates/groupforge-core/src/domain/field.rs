//! Field taxonomy, metadata and type inference.

use std::fmt;

use super::{Entry, FieldValue};

/// Declared or inferred type of a field.
///
/// The type selects which per-field distance applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FieldType {
    Select,
    Multiselect,
    Checkbox,
    Number,
    Text,
    /// Ordered categories such as skill tiers.
    RankedCategory,
    /// Numeric statistic such as wins or rating.
    RankedStat,
}

impl FieldType {
    /// Returns true for types compared by numeric range.
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Number | FieldType::RankedStat)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Select => "select",
            FieldType::Multiselect => "multiselect",
            FieldType::Checkbox => "checkbox",
            FieldType::Number => "number",
            FieldType::Text => "text",
            FieldType::RankedCategory => "ranked-category",
            FieldType::RankedStat => "ranked-stat",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field selected by the caller, with its importance weight.
///
/// `field_type` and `options` are optional; untyped fields are inferred from
/// sample data by [`resolve_field_meta`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedField {
    pub field_id: String,
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub field_type: Option<FieldType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Option<Vec<String>>,
}

impl WeightedField {
    pub fn new(field_id: impl Into<String>, weight: f64) -> Self {
        Self {
            field_id: field_id.into(),
            weight,
            field_type: None,
            options: None,
        }
    }

    /// Declares the field type instead of inferring it.
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Declares the option list; for ranked categories its order is the rank.
    pub fn with_options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }
}

/// Typed field metadata consumed by the distance model.
///
/// Derived statistics (numeric ranges, ordinal maps) live in
/// [`DerivedRanges`](crate::distance::DerivedRanges), not here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMeta {
    pub field_id: String,
    pub field_type: FieldType,
    /// Importance in `[0, 1]`.
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Option<Vec<String>>,
}

impl FieldMeta {
    pub fn new(field_id: impl Into<String>, field_type: FieldType, weight: f64) -> Self {
        Self {
            field_id: field_id.into(),
            field_type,
            weight,
            options: None,
        }
    }

    pub fn with_options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }
}

/// Infers field metadata from the first known value of each field.
///
/// boolean → checkbox, number → number, list → multiselect,
/// string → select; a field with no known values becomes text.
///
/// # Example
///
/// ```
/// use groupforge_core::{infer_field_meta, Entry, FieldType, WeightedField};
///
/// let entries = vec![
///     Entry::new("a").with("rating", 4.0),
///     Entry::new("b").with("team", "red"),
/// ];
/// let fields = vec![WeightedField::new("rating", 1.0), WeightedField::new("team", 0.5)];
/// let metas = infer_field_meta(&fields, &entries);
///
/// assert_eq!(metas[0].field_type, FieldType::Number);
/// assert_eq!(metas[1].field_type, FieldType::Select);
/// ```
pub fn infer_field_meta(fields: &[WeightedField], entries: &[Entry]) -> Vec<FieldMeta> {
    fields
        .iter()
        .map(|field| FieldMeta {
            field_id: field.field_id.clone(),
            field_type: infer_type(&field.field_id, entries),
            weight: field.weight,
            options: field.options.clone(),
        })
        .collect()
}

/// Resolves field metadata, keeping declared types and inferring the rest.
pub fn resolve_field_meta(fields: &[WeightedField], entries: &[Entry]) -> Vec<FieldMeta> {
    fields
        .iter()
        .map(|field| FieldMeta {
            field_id: field.field_id.clone(),
            field_type: field
                .field_type
                .unwrap_or_else(|| infer_type(&field.field_id, entries)),
            weight: field.weight,
            options: field.options.clone(),
        })
        .collect()
}

fn infer_type(field_id: &str, entries: &[Entry]) -> FieldType {
    let first = entries
        .iter()
        .map(|entry| entry.get(field_id))
        .find(|value| !matches!(value, FieldValue::Unknown));

    match first {
        Some(FieldValue::Bool(_)) => FieldType::Checkbox,
        Some(FieldValue::Number(_)) => FieldType::Number,
        Some(FieldValue::List(_)) => FieldType::Multiselect,
        Some(FieldValue::Text(_)) => FieldType::Select,
        Some(FieldValue::Unknown) | None => FieldType::Text,
    }
}
