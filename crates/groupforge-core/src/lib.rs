//! GroupForge Core - Core types and distance model for grouping
//!
//! This crate provides the fundamental abstractions for GroupForge:
//! - Domain types for entries, fields, criteria and results
//! - The Gower distance model over typed fields
//! - Field type inference from sample data

pub mod distance;
pub mod domain;
pub mod error;

pub use distance::{
    build_distance_matrix, field_distance, gower_distance, DerivedRanges, DistanceMatrix,
    NumericRange, OrdinalMap,
};
pub use domain::{
    infer_field_meta, resolve_field_meta, BalancedCriteria, ClusterCriteria, Criteria, Entry,
    FieldMeta, FieldType, FieldValue, GroupResult, Objective, PenaltyMatrix, WeightedField,
};
pub use error::{GroupForgeError, Result};
