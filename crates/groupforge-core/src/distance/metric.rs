//! Per-field and multi-field (Gower) distances.

use std::collections::HashSet;

use crate::domain::{Entry, FieldMeta, FieldType, FieldValue};

use super::DerivedRanges;

/// Distance between two values of one field, in `[0, 1]`.
///
/// An unknown value on either side is maximally distant.
///
/// # Example
///
/// ```
/// use groupforge_core::{field_distance, DerivedRanges, FieldMeta, FieldType, FieldValue};
///
/// let meta = FieldMeta::new("sport", FieldType::Select, 1.0);
/// let ranges = DerivedRanges::default();
///
/// let a = FieldValue::from("Tennis");
/// let b = FieldValue::from("tennis");
/// assert_eq!(field_distance(&a, &b, &meta, &ranges), 0.0);
/// assert_eq!(field_distance(&a, &FieldValue::Unknown, &meta, &ranges), 1.0);
/// ```
pub fn field_distance(
    a: &FieldValue,
    b: &FieldValue,
    meta: &FieldMeta,
    ranges: &DerivedRanges,
) -> f64 {
    if a.is_unknown() || b.is_unknown() {
        return 1.0;
    }

    match meta.field_type {
        FieldType::Select | FieldType::Text => match (a.key_string(), b.key_string()) {
            (Some(x), Some(y)) if x.to_lowercase() == y.to_lowercase() => 0.0,
            _ => 1.0,
        },
        FieldType::Checkbox => match (a.as_bool(), b.as_bool()) {
            (Some(x), Some(y)) if x == y => 0.0,
            _ => 1.0,
        },
        FieldType::Multiselect => match (a.as_list(), b.as_list()) {
            (Some(x), Some(y)) => jaccard_distance(&x, &y),
            _ => 1.0,
        },
        FieldType::Number | FieldType::RankedStat => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => {
                let span = ranges
                    .numeric(&meta.field_id)
                    .map_or(0.0, |r| r.span());
                if span <= 0.0 {
                    0.0
                } else {
                    ((x - y).abs() / span).min(1.0)
                }
            }
            _ => 1.0,
        },
        FieldType::RankedCategory => {
            let Some(map) = ranges.ordinal(&meta.field_id) else {
                return 1.0;
            };
            let ranks = a
                .key_string()
                .and_then(|x| map.rank(&x))
                .zip(b.key_string().and_then(|y| map.rank(&y)));
            match ranks {
                None => 1.0,
                Some(_) if map.spread() == 0 => 0.0,
                Some((x, y)) => x.abs_diff(y) as f64 / map.spread() as f64,
            }
        }
    }
}

/// Jaccard distance between two string sets; two empty sets are identical.
fn jaccard_distance(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    1.0 - intersection as f64 / union as f64
}

/// Weight-normalized mean of per-field distances.
///
/// Fields with zero weight are ignored; zero total weight gives 0.
pub fn gower_distance(a: &Entry, b: &Entry, fields: &[FieldMeta], ranges: &DerivedRanges) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for field in fields.iter().filter(|f| f.weight > 0.0) {
        let d = field_distance(a.get(&field.field_id), b.get(&field.field_id), field, ranges);
        weighted += field.weight * d;
        total_weight += field.weight;
    }
    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    }
}
