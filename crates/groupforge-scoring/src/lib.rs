//! GroupForge Scoring - quality metrics for grouping results
//!
//! Scores a grouping after the fact against the same entries and criteria
//! that produced it:
//! - Balance metrics for balanced teams (per-field averages and gaps)
//! - Cluster metrics for similarity/diversity groups (intra-group distance)

pub mod metrics;

pub use metrics::{
    compute_balance_metrics, compute_cluster_metrics, compute_metrics, BalanceMetrics,
    ClusterMetrics, GroupCohesion, GroupFieldAverages, Metrics,
};
