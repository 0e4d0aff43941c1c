//! Co-grouping history used to encourage variety between runs.

use std::collections::HashMap;

use super::GroupResult;

/// Symmetric penalty per unordered pair of entry ids.
///
/// An empty matrix has no effect on grouping.
///
/// # Example
///
/// ```
/// use groupforge_core::{GroupResult, PenaltyMatrix};
///
/// let mut penalties = PenaltyMatrix::new();
/// penalties.record_groups(&[GroupResult::new("Team 1", vec!["a".into(), "b".into()])]);
/// penalties.add("b", "a", 0.5);
///
/// assert_eq!(penalties.get("a", "b"), 1.5);
/// assert_eq!(penalties.get("a", "c"), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PenaltyMatrix {
    pairs: HashMap<(String, String), f64>,
}

impl PenaltyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the penalty for a pair. Self-pairs and non-positive values are ignored.
    pub fn set(&mut self, a: &str, b: &str, penalty: f64) {
        if a == b {
            return;
        }
        let key = pair_key(a, b);
        if penalty.is_finite() && penalty > 0.0 {
            self.pairs.insert(key, penalty);
        } else {
            self.pairs.remove(&key);
        }
    }

    /// Adds to the penalty for a pair.
    pub fn add(&mut self, a: &str, b: &str, penalty: f64) {
        let current = self.get(a, b);
        self.set(a, b, current + penalty);
    }

    /// Returns the penalty for a pair, 0 when absent.
    pub fn get(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 0.0;
        }
        self.pairs.get(&pair_key(a, b)).copied().unwrap_or(0.0)
    }

    /// Accumulates one unit of penalty for every pair that shares a group.
    pub fn record_groups(&mut self, groups: &[GroupResult]) {
        for group in groups {
            for (i, a) in group.member_ids.iter().enumerate() {
                for b in &group.member_ids[i + 1..] {
                    self.add(a, b, 1.0);
                }
            }
        }
    }

    /// Iterates over stored pairs and their penalties.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.pairs
            .iter()
            .map(|((a, b), p)| (a.as_str(), b.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
