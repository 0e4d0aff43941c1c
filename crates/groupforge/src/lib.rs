//! GroupForge - Deterministic Grouping in Rust
//!
//! Partition people into groups by exact attributes, by similarity or
//! diversity over typed fields, or into score-balanced teams.
//!
//! # Example
//!
//! ```rust
//! use groupforge::prelude::*;
//!
//! let entries = vec![
//!     Entry::new("ana").with("rating", 9.0).with("gender", "F"),
//!     Entry::new("ben").with("rating", 3.0).with("gender", "M"),
//!     Entry::new("cai").with("rating", 7.0).with("gender", "M"),
//!     Entry::new("dee").with("rating", 5.0).with("gender", "F"),
//! ];
//!
//! let by_gender = group(&entries, &Criteria::split(["gender"]), None).unwrap();
//! assert_eq!(by_gender[0].group_name, "F");
//!
//! let criteria = Criteria::balanced(vec![WeightedField::new("rating", 1.0)], 2);
//! let teams = group(&entries, &criteria, None).unwrap();
//! assert_eq!(teams.len(), 2);
//! ```

#[cfg(feature = "console")]
pub mod console;

mod run;
pub use run::{group, group_with_config};

// Domain types
pub use groupforge_core::{
    BalancedCriteria, ClusterCriteria, Criteria, Entry, FieldMeta, FieldType, FieldValue,
    GroupForgeError, GroupResult, Objective, PenaltyMatrix, Result, WeightedField,
};

// Distance model
pub use groupforge_core::{
    build_distance_matrix, field_distance, gower_distance, infer_field_meta, resolve_field_meta,
    DerivedRanges, DistanceMatrix, NumericRange, OrdinalMap,
};

// Metrics
pub use groupforge_scoring::{
    compute_balance_metrics, compute_cluster_metrics, compute_metrics, BalanceMetrics,
    ClusterMetrics, Metrics,
};

// Algorithms
pub use groupforge_solver::{
    cluster_by_distance, multi_balanced_teams, split_by_attributes, BalanceRequest,
    ClusterRequest, GroupingEngine,
};

// Configuration
pub use groupforge_config::{BalanceConfig, ClusteringConfig, ConfigError, EngineConfig};

pub mod prelude {
    pub use super::{group, group_with_config};
    pub use super::{
        Criteria, Entry, FieldType, FieldValue, GroupResult, Objective, PenaltyMatrix,
        WeightedField,
    };
    pub use super::{EngineConfig, GroupingEngine, Metrics};
}
