//! Similarity and diversity clustering.
//!
//! Small inputs are clustered exactly over the full Gower distance matrix
//! (see [`exact`]). Inputs above the configured limit fall back to a
//! one-dimensional projection (see [`projection`]) that does not support
//! variety penalties.

pub mod exact;
pub mod projection;


use groupforge_config::ClusteringConfig;
use groupforge_core::{
    DerivedRanges, DistanceMatrix, Entry, FieldMeta, GroupResult, Objective, PenaltyMatrix,
};
use tracing::debug;

pub use exact::{farthest_first_seeds, greedy_assign, Seeding};
pub use projection::{projection_groups, projection_scores};

/// A clustering request over typed fields.
#[derive(Debug, Clone)]
pub struct ClusterRequest<'a> {
    pub group_count: usize,
    pub fields: Vec<FieldMeta>,
    pub objective: Objective,
    pub variety_penalty: Option<&'a PenaltyMatrix>,
    pub variety_weight: f64,
}

impl<'a> ClusterRequest<'a> {
    pub fn new(fields: Vec<FieldMeta>, group_count: usize, objective: Objective) -> Self {
        Self {
            group_count,
            fields,
            objective,
            variety_penalty: None,
            variety_weight: 0.0,
        }
    }

    /// Blends co-grouping history into the distances with the given weight.
    pub fn with_variety(mut self, penalty: &'a PenaltyMatrix, weight: f64) -> Self {
        self.variety_penalty = Some(penalty);
        self.variety_weight = weight;
        self
    }
}

/// Clusters entries into `min(group_count, n)` groups named `Group 1..k`.
///
/// # Example
///
/// ```
/// use groupforge_config::ClusteringConfig;
/// use groupforge_core::{Entry, FieldMeta, FieldType, Objective};
/// use groupforge_solver::cluster::{cluster_by_distance, ClusterRequest};
///
/// let entries: Vec<Entry> = [1.0, 2.0, 50.0, 51.0]
///     .iter()
///     .enumerate()
///     .map(|(i, v)| Entry::new(format!("e{i}")).with("score", *v))
///     .collect();
/// let request = ClusterRequest::new(
///     vec![FieldMeta::new("score", FieldType::Number, 1.0)],
///     2,
///     Objective::Similarity,
/// );
///
/// let groups = cluster_by_distance(&entries, &request, &ClusteringConfig::default());
/// assert_eq!(groups[0].member_ids, vec!["e0", "e1"]);
/// assert_eq!(groups[1].member_ids, vec!["e3", "e2"]);
/// ```
pub fn cluster_by_distance(
    entries: &[Entry],
    request: &ClusterRequest<'_>,
    config: &ClusteringConfig,
) -> Vec<GroupResult> {
    let n = entries.len();
    let k = request.group_count.min(n);
    if k == 0 {
        return Vec::new();
    }

    let ranges = DerivedRanges::compute(entries, &request.fields);

    let groups = if n <= config.exact_limit {
        debug!(event = "clustering_path", path = "exact", entries = n, groups = k);
        let mut matrix = DistanceMatrix::build(entries, &request.fields, &ranges);
        if let Some(penalty) = request.variety_penalty {
            let adjusted =
                matrix.apply_variety(entries, penalty, request.variety_weight, request.objective);
            if adjusted > 0 {
                debug!(event = "variety_adjusted", pairs = adjusted);
            }
        }
        let seeding = farthest_first_seeds(&matrix, k);
        debug!(event = "seeding_complete", seeds = ?seeding.seeds);
        greedy_assign(&matrix, &seeding, request.objective)
    } else {
        debug!(event = "clustering_path", path = "projection", entries = n, groups = k);
        let scores = projection_scores(entries, &request.fields, &ranges);
        projection_groups(entries, &scores, k, request.objective)
    };

    groups
        .into_iter()
        .enumerate()
        .map(|(g, members)| {
            GroupResult::new(
                format!("Group {}", g + 1),
                members
                    .into_iter()
                    .map(|i| entries[i].id().to_string())
                    .collect(),
            )
        })
        .collect()
}
