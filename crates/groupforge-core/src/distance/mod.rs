//! Distance model over typed fields
//!
//! Distances are always in `[0, 1]` per field. Multi-field distance is the
//! Gower distance: the weight-normalized mean of per-field distances.
//!
//! Computation is two-phase: [`DerivedRanges`] is computed once from the
//! full entry set, then passed alongside the field metadata.

mod matrix;
mod metric;
mod ranges;

#[cfg(test)]
mod tests;

pub use matrix::{build_distance_matrix, DistanceMatrix};
pub use metric::{field_distance, gower_distance};
pub use ranges::{DerivedRanges, NumericRange, OrdinalMap};
