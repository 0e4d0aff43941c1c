//! Balance metrics for balanced teams.

use std::collections::{BTreeMap, HashMap};

use groupforge_core::{BalancedCriteria, Entry, GroupResult, NumericRange};
use tracing::debug;

use super::to_percent;

/// Average of each balance field within one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupFieldAverages {
    pub group_name: String,
    pub field_averages: BTreeMap<String, f64>,
}

/// How evenly the balance fields are spread across groups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceMetrics {
    pub per_group: Vec<GroupFieldAverages>,
    /// 100 means every field has the same average in every group.
    pub balance_percent: u32,
    /// Highest minus lowest group average, per field.
    pub per_field_gap: BTreeMap<String, f64>,
}

/// Computes balance metrics for a grouping.
///
/// Entries lacking a numeric value for a field contribute nothing to that
/// field's average; a group with no valid values averages 0. Gaps are
/// normalized by the field's range over all entries (1 when degenerate).
///
/// # Example
///
/// ```
/// use groupforge_core::{BalancedCriteria, Entry, GroupResult, WeightedField};
/// use groupforge_scoring::compute_balance_metrics;
///
/// let entries: Vec<Entry> = (0..4)
///     .map(|i| Entry::new(format!("u{i}")).with("rating", 5.0))
///     .collect();
/// let groups = vec![
///     GroupResult::new("Team 1", vec!["u0".into(), "u1".into()]),
///     GroupResult::new("Team 2", vec!["u2".into(), "u3".into()]),
/// ];
/// let criteria = BalancedCriteria::new(vec![WeightedField::new("rating", 1.0)], 2);
///
/// let metrics = compute_balance_metrics(&groups, &entries, &criteria);
/// assert_eq!(metrics.balance_percent, 100);
/// assert_eq!(metrics.per_field_gap["rating"], 0.0);
/// ```
pub fn compute_balance_metrics(
    groups: &[GroupResult],
    entries: &[Entry],
    criteria: &BalancedCriteria,
) -> BalanceMetrics {
    let by_id: HashMap<&str, &Entry> = entries.iter().map(|e| (e.id(), e)).collect();
    let fields = &criteria.balance_fields;

    let per_group: Vec<GroupFieldAverages> = groups
        .iter()
        .map(|group| {
            let members: Vec<&Entry> = group
                .member_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect();
            let field_averages = fields
                .iter()
                .map(|field| {
                    let values: Vec<f64> = members
                        .iter()
                        .filter_map(|e| e.get(&field.field_id).as_number())
                        .collect();
                    let avg = if values.is_empty() {
                        0.0
                    } else {
                        values.iter().sum::<f64>() / values.len() as f64
                    };
                    (field.field_id.clone(), avg)
                })
                .collect();
            GroupFieldAverages {
                group_name: group.group_name.clone(),
                field_averages,
            }
        })
        .collect();

    let mut per_field_gap = BTreeMap::new();
    for field in fields {
        let averages = per_group
            .iter()
            .filter_map(|g| g.field_averages.get(&field.field_id).copied());
        let range = NumericRange::observe(averages);
        per_field_gap.insert(field.field_id.clone(), range.span());
    }

    let total_weight: f64 = fields.iter().map(|f| f.weight).sum();
    let balance_percent = if groups.len() <= 1 || total_weight <= 0.0 {
        100
    } else {
        let imbalance: f64 = fields
            .iter()
            .map(|field| {
                let global = NumericRange::observe(
                    entries
                        .iter()
                        .filter_map(|e| e.get(&field.field_id).as_number()),
                );
                let span = if global.span() > 0.0 { global.span() } else { 1.0 };
                let gap = per_field_gap.get(&field.field_id).copied().unwrap_or(0.0);
                (field.weight / total_weight) * gap / span
            })
            .sum();
        to_percent(1.0 - imbalance)
    };

    debug!(
        event = "balance_metrics",
        groups = groups.len(),
        balance_percent = balance_percent,
    );

    BalanceMetrics {
        per_group,
        balance_percent,
        per_field_gap,
    }
}
