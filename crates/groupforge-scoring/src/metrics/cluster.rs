//! Cohesion metrics for similarity and diversity clustering.

use std::collections::HashMap;

use groupforge_core::{
    gower_distance, resolve_field_meta, ClusterCriteria, DerivedRanges, Entry, GroupResult,
    Objective,
};
use tracing::debug;

use super::to_percent;

/// Mean pairwise distance within one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupCohesion {
    pub group_name: String,
    /// In `[0, 1]`; 0 for groups with fewer than two members.
    pub avg_intra_distance: f64,
}

/// How well the groups match the clustering objective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterMetrics {
    pub per_group: Vec<GroupCohesion>,
    /// For similarity, 100 means every group is internally identical; for
    /// diversity, 100 means every pair within a group is maximally distant.
    pub quality_percent: u32,
}

/// Computes cluster metrics for a grouping.
///
/// Untyped fields are inferred from the entries. The overall distance is
/// the pair-count-weighted mean of the per-group averages.
pub fn compute_cluster_metrics(
    groups: &[GroupResult],
    entries: &[Entry],
    criteria: &ClusterCriteria,
    objective: Objective,
) -> ClusterMetrics {
    let fields = resolve_field_meta(&criteria.fields, entries);
    let ranges = DerivedRanges::compute(entries, &fields);
    let by_id: HashMap<&str, &Entry> = entries.iter().map(|e| (e.id(), e)).collect();

    let mut total_distance = 0.0;
    let mut total_pairs = 0usize;
    let per_group = groups
        .iter()
        .map(|group| {
            let members: Vec<&Entry> = group
                .member_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect();

            let mut sum = 0.0;
            let mut pairs = 0usize;
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    sum += gower_distance(a, b, &fields, &ranges);
                    pairs += 1;
                }
            }
            total_distance += sum;
            total_pairs += pairs;

            GroupCohesion {
                group_name: group.group_name.clone(),
                avg_intra_distance: if pairs > 0 { sum / pairs as f64 } else { 0.0 },
            }
        })
        .collect();

    let avg_distance = if total_pairs > 0 {
        total_distance / total_pairs as f64
    } else {
        0.0
    };
    let quality_percent = match objective {
        Objective::Similarity => to_percent(1.0 - avg_distance),
        Objective::Diversity => to_percent(avg_distance),
    };

    debug!(
        event = "cluster_metrics",
        groups = groups.len(),
        pairs = total_pairs,
        quality_percent = quality_percent,
    );

    ClusterMetrics {
        per_group,
        quality_percent,
    }
}
