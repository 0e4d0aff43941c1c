//! Post-hoc quality metrics.

mod balance;
mod cluster;

#[cfg(test)]
mod tests;

use groupforge_core::{Criteria, Entry, GroupResult};

pub use balance::{compute_balance_metrics, BalanceMetrics, GroupFieldAverages};
pub use cluster::{compute_cluster_metrics, ClusterMetrics, GroupCohesion};

/// Metrics for one grouping result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Metrics {
    Balance(BalanceMetrics),
    Cluster(ClusterMetrics),
}

impl Metrics {
    /// Headline score in `0..=100`.
    pub fn percent(&self) -> u32 {
        match self {
            Metrics::Balance(m) => m.balance_percent,
            Metrics::Cluster(m) => m.quality_percent,
        }
    }
}

/// Computes the metrics matching the criteria kind.
///
/// Exact-match splits have no quality metric and yield `None`.
pub fn compute_metrics(
    groups: &[GroupResult],
    entries: &[Entry],
    criteria: &Criteria,
) -> Option<Metrics> {
    match criteria {
        Criteria::Split { .. } => None,
        Criteria::Similarity(c) | Criteria::Diversity(c) => {
            let objective = criteria.objective()?;
            Some(Metrics::Cluster(compute_cluster_metrics(
                groups, entries, c, objective,
            )))
        }
        Criteria::Balanced(c) => Some(Metrics::Balance(compute_balance_metrics(
            groups, entries, c,
        ))),
    }
}

// Rounds a fraction to a whole percentage in `0..=100`.
pub(crate) fn to_percent(fraction: f64) -> u32 {
    if fraction.is_nan() {
        return 0;
    }
    (100.0 * fraction).clamp(0.0, 100.0).round() as u32
}
