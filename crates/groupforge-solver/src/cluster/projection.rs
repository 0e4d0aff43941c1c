//! Projection fallback for inputs too large for a full distance matrix.
//!
//! Each entry is reduced to a single score in `[0, 1]`; entries are then
//! sorted by score and sliced (similarity) or snake-drafted (diversity).

use groupforge_core::{DerivedRanges, Entry, FieldMeta, FieldType, FieldValue, Objective};

use crate::draft::SnakeDraft;

/// Weighted mean of each entry's normalized field values.
///
/// Numeric fields are range-normalized, ranked categories rank-normalized,
/// checkboxes map to 0/1, and everything else to a stable string hash.
/// Missing values normalize to 0.
pub fn projection_scores(entries: &[Entry], fields: &[FieldMeta], ranges: &DerivedRanges) -> Vec<f64> {
    let total_weight: f64 = fields.iter().filter(|f| f.weight > 0.0).map(|f| f.weight).sum();
    entries
        .iter()
        .map(|entry| {
            if total_weight <= 0.0 {
                return 0.0;
            }
            fields
                .iter()
                .filter(|f| f.weight > 0.0)
                .map(|f| f.weight * normalized_value(entry.get(&f.field_id), f, ranges))
                .sum::<f64>()
                / total_weight
        })
        .collect()
}

fn normalized_value(value: &FieldValue, field: &FieldMeta, ranges: &DerivedRanges) -> f64 {
    if value.is_unknown() {
        return 0.0;
    }
    match field.field_type {
        FieldType::Number | FieldType::RankedStat => value
            .as_number()
            .zip(ranges.numeric(&field.field_id))
            .map_or(0.0, |(v, range)| range.normalize(v)),
        FieldType::RankedCategory => value
            .key_string()
            .and_then(|s| ranges.ordinal(&field.field_id)?.normalize(&s))
            .unwrap_or(0.0),
        FieldType::Checkbox => match value.as_bool() {
            Some(true) => 1.0,
            _ => 0.0,
        },
        FieldType::Select | FieldType::Text | FieldType::Multiselect => value
            .key_string()
            .map_or(0.0, |s| stable_hash_unit(&s.to_lowercase())),
    }
}

// FNV-1a, fixed across platforms and releases.
fn stable_hash_unit(s: &str) -> f64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let hash = s
        .bytes()
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME));
    hash as f64 / u64::MAX as f64
}

/// Groups entry indices by projection score.
pub fn projection_groups(
    entries: &[Entry],
    scores: &[f64],
    k: usize,
    objective: Objective,
) -> Vec<Vec<usize>> {
    let n = entries.len();
    let mut groups = vec![Vec::new(); k];
    if n == 0 || k == 0 {
        return groups;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        scores[a]
            .total_cmp(&scores[b])
            .then_with(|| entries[a].id().cmp(entries[b].id()))
    });

    match objective {
        Objective::Similarity => {
            for (rank, &i) in order.iter().enumerate() {
                groups[rank * k / n].push(i);
            }
        }
        Objective::Diversity => {
            let mut draft = SnakeDraft::new(k);
            for &i in &order {
                groups[draft.next_bucket()].push(i);
            }
        }
    }
    groups
}
