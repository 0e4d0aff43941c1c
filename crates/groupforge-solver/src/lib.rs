//! GroupForge grouping engine
//!
//! This crate provides the grouping algorithms:
//! - Exact-match splitting by one or two attributes
//! - Similarity and diversity clustering over Gower distances
//! - Balanced team formation with snake drafting and swap refinement
//! - [`GroupingEngine`], which validates criteria and dispatches to them

pub mod balance;
pub mod cluster;
pub mod draft;
pub mod engine;
pub mod split;

pub use balance::{composite_scores, multi_balanced_teams, refine_teams, BalanceRequest, RefinementStats};
pub use cluster::{cluster_by_distance, ClusterRequest};
pub use draft::SnakeDraft;
pub use engine::GroupingEngine;
pub use split::{group_key, split_by_attributes};
