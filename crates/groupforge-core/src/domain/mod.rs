//! Domain model for grouping problems
//!
//! - `Entry` / `FieldValue`: the immutable inputs
//! - `FieldType` / `FieldMeta` / `WeightedField`: field taxonomy and weights
//! - `Criteria`: what kind of grouping to perform
//! - `GroupResult`: the output
//! - `PenaltyMatrix`: co-grouping history for variety-aware runs

mod criteria;
mod entry;
mod field;
mod group;
mod penalty;
mod value;

#[cfg(test)]
mod tests;

pub use criteria::{BalancedCriteria, ClusterCriteria, Criteria, Objective};
pub use entry::Entry;
pub use field::{infer_field_meta, resolve_field_meta, FieldMeta, FieldType, WeightedField};
pub use group::GroupResult;
pub use penalty::PenaltyMatrix;
pub use value::FieldValue;
