//! Dense symmetric pairwise distance matrix.

use std::collections::HashMap;

use crate::domain::{Entry, FieldMeta, Objective, PenaltyMatrix};

use super::{gower_distance, DerivedRanges};

/// Symmetric N×N matrix of pairwise distances with a zero diagonal.
///
/// Stored row-major in a single allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates an all-zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Builds the Gower distance matrix for `entries`.
    ///
    /// # Example
    ///
    /// ```
    /// use groupforge_core::{DerivedRanges, DistanceMatrix, Entry, FieldMeta, FieldType};
    ///
    /// let entries = vec![
    ///     Entry::new("a").with("score", 0.0),
    ///     Entry::new("b").with("score", 10.0),
    /// ];
    /// let fields = vec![FieldMeta::new("score", FieldType::Number, 1.0)];
    /// let ranges = DerivedRanges::compute(&entries, &fields);
    /// let matrix = DistanceMatrix::build(&entries, &fields, &ranges);
    ///
    /// assert_eq!(matrix.get(0, 1), 1.0);
    /// assert_eq!(matrix.get(1, 0), 1.0);
    /// assert_eq!(matrix.get(1, 1), 0.0);
    /// ```
    pub fn build(entries: &[Entry], fields: &[FieldMeta], ranges: &DerivedRanges) -> Self {
        let n = entries.len();
        let mut matrix = Self::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = gower_distance(&entries[i], &entries[j], fields, ranges);
                matrix.set(i, j, d);
            }
        }
        matrix
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Sets both `(i, j)` and `(j, i)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
        self.data[j * self.n + i] = value;
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Blends co-grouping history into the distances.
    ///
    /// Similarity adds `weight * penalty` so recurring pairs look farther
    /// apart; diversity subtracts it, floored at 0. `entries` must be the
    /// entries the matrix was built from. Returns the number of adjusted pairs.
    pub fn apply_variety(
        &mut self,
        entries: &[Entry],
        penalties: &PenaltyMatrix,
        weight: f64,
        objective: Objective,
    ) -> usize {
        if weight <= 0.0 || penalties.is_empty() {
            return 0;
        }
        let index: HashMap<&str, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id(), i))
            .collect();

        let mut adjusted = 0;
        for (a, b, penalty) in penalties.iter() {
            let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) else {
                continue;
            };
            let d = self.get(i, j);
            let blended = match objective {
                Objective::Similarity => d + weight * penalty,
                Objective::Diversity => (d - weight * penalty).max(0.0),
            };
            self.set(i, j, blended);
            adjusted += 1;
        }
        adjusted
    }
}

/// Builds the distance matrix for `entries`, deriving ranges internally.
pub fn build_distance_matrix(entries: &[Entry], fields: &[FieldMeta]) -> DistanceMatrix {
    let ranges = DerivedRanges::compute(entries, fields);
    DistanceMatrix::build(entries, fields, &ranges)
}
