//! Statistics derived once per invocation from the full entry set.
//!
//! Distance functions read these alongside the field metadata; nothing is
//! written back into [`FieldMeta`].

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Entry, FieldMeta, FieldType, FieldValue};

/// Observed numeric bounds of a field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Computes the range over an iterator of values.
    ///
    /// Returns `{0, 0}` when there are no values or all values are equal.
    pub fn observe(values: impl IntoIterator<Item = f64>) -> Self {
        let mut bounds: Option<(f64, f64)> = None;
        for v in values {
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        match bounds {
            Some((min, max)) if min < max => Self { min, max },
            _ => Self::default(),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps a value into `[0, 1]`; a degenerate range maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            0.0
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        }
    }
}

/// Rank of each category of a ranked-category field.
///
/// Categories are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrdinalMap {
    ranks: HashMap<String, usize>,
    max_rank: usize,
}

impl OrdinalMap {
    /// Builds a map where the order of `categories` is the rank.
    ///
    /// Repeated categories keep their first rank.
    pub fn from_ordered<I, T>(categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut ranks = HashMap::new();
        for category in categories {
            let next = ranks.len();
            ranks.entry(category.as_ref().to_lowercase()).or_insert(next);
        }
        let max_rank = ranks.len().saturating_sub(1);
        Self { ranks, max_rank }
    }

    pub fn rank(&self, category: &str) -> Option<usize> {
        self.ranks.get(&category.to_lowercase()).copied()
    }

    /// Distance between the lowest and highest rank.
    pub fn spread(&self) -> usize {
        self.max_rank
    }

    /// Maps a category into `[0, 1]` by rank; unknown categories give `None`.
    pub fn normalize(&self, category: &str) -> Option<f64> {
        let rank = self.rank(category)?;
        if self.max_rank == 0 {
            Some(0.0)
        } else {
            Some(rank as f64 / self.max_rank as f64)
        }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Numeric ranges and ordinal maps for a set of fields.
///
/// # Example
///
/// ```
/// use groupforge_core::{DerivedRanges, Entry, FieldMeta, FieldType};
///
/// let entries = vec![
///     Entry::new("a").with("age", 20.0),
///     Entry::new("b").with("age", 40.0),
/// ];
/// let fields = vec![FieldMeta::new("age", FieldType::Number, 1.0)];
/// let ranges = DerivedRanges::compute(&entries, &fields);
///
/// assert_eq!(ranges.numeric("age").map(|r| r.span()), Some(20.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedRanges {
    numeric: HashMap<String, NumericRange>,
    ordinal: HashMap<String, OrdinalMap>,
}

impl DerivedRanges {
    /// Scans every entry once per numeric or ranked-category field.
    pub fn compute(entries: &[Entry], fields: &[FieldMeta]) -> Self {
        let mut ranges = Self::default();
        for field in fields {
            match field.field_type {
                t if t.is_numeric() => {
                    let range = NumericRange::observe(
                        entries
                            .iter()
                            .filter_map(|e| e.get(&field.field_id).as_number()),
                    );
                    ranges.numeric.insert(field.field_id.clone(), range);
                }
                FieldType::RankedCategory => {
                    let map = match &field.options {
                        Some(options) if !options.is_empty() => OrdinalMap::from_ordered(options),
                        _ => observed_categories(entries, &field.field_id),
                    };
                    ranges.ordinal.insert(field.field_id.clone(), map);
                }
                _ => {}
            }
        }
        ranges
    }

    pub fn numeric(&self, field_id: &str) -> Option<&NumericRange> {
        self.numeric.get(field_id)
    }

    pub fn ordinal(&self, field_id: &str) -> Option<&OrdinalMap> {
        self.ordinal.get(field_id)
    }

    pub fn set_numeric(&mut self, field_id: impl Into<String>, range: NumericRange) {
        self.numeric.insert(field_id.into(), range);
    }

    pub fn set_ordinal(&mut self, field_id: impl Into<String>, map: OrdinalMap) {
        self.ordinal.insert(field_id.into(), map);
    }
}

// Distinct observed categories in lexicographic order.
fn observed_categories(entries: &[Entry], field_id: &str) -> OrdinalMap {
    let categories: BTreeSet<String> = entries
        .iter()
        .map(|e| e.get(field_id))
        .filter_map(FieldValue::key_string)
        .map(|s| s.to_lowercase())
        .collect();
    OrdinalMap::from_ordered(categories)
}
