//! Swap-based local search over drafted teams.
//!
//! Cost is the weighted spread of team averages across the balance fields.
//! Each pass scans every member pair between every pair of teams and keeps
//! the first swap that strictly lowers the cost.

use std::collections::HashMap;

use groupforge_config::BalanceConfig;
use groupforge_core::{Entry, PenaltyMatrix, WeightedField};
use tracing::{debug, trace};

/// Outcome of a refinement run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RefinementStats {
    /// Passes run, including the final pass without improvement.
    pub passes: usize,
    pub swaps_accepted: usize,
    pub initial_cost: f64,
    pub final_cost: f64,
}

/// Refines `teams` (entry indices) in place by pairwise swaps.
///
/// With a penalty matrix and positive `variety_weight`, a swap's balance
/// cost is reduced by `variety_weight * scale * (old - new)` where old/new
/// are the penalties the two swapped members share with their teammates.
///
/// With `partition_keys` (one per entry), only members sharing a key are
/// swapped, so every team keeps its drafted category counts.
pub fn refine_teams(
    entries: &[Entry],
    teams: &mut [Vec<usize>],
    fields: &[WeightedField],
    partition_keys: Option<&[String]>,
    variety: Option<(&PenaltyMatrix, f64)>,
    config: &BalanceConfig,
) -> RefinementStats {
    let mut state = TeamState::new(entries, teams, fields);
    let initial_cost = state.cost();
    let mut stats = RefinementStats {
        initial_cost,
        final_cost: initial_cost,
        ..RefinementStats::default()
    };
    if teams.len() < 2 || state.weights.iter().all(|&w| w <= 0.0) {
        return stats;
    }

    let mut affinity = variety
        .filter(|(penalty, weight)| *weight > 0.0 && !penalty.is_empty())
        .map(|(penalty, weight)| {
            (
                Affinity::new(entries, teams, penalty),
                weight * config.variety_swap_scale,
            )
        });

    let mut current = initial_cost;
    for pass in 1..=config.max_passes {
        stats.passes = pass;
        let mut improved = false;

        for ta in 0..teams.len() {
            for tb in (ta + 1)..teams.len() {
                for i in 0..teams[ta].len() {
                    for j in 0..teams[tb].len() {
                        let a = teams[ta][i];
                        let b = teams[tb][j];
                        if partition_keys.is_some_and(|keys| keys[a] != keys[b]) {
                            continue;
                        }
                        let balance = state.cost_with_swap(ta, a, tb, b);
                        let variety_gain = affinity
                            .as_ref()
                            .map_or(0.0, |(aff, scale)| scale * aff.swap_gain(ta, a, tb, b));
                        if balance - variety_gain < current - config.improvement_epsilon {
                            state.apply_swap(ta, a, tb, b);
                            if let Some((aff, _)) = affinity.as_mut() {
                                aff.apply_swap(ta, a, tb, b);
                            }
                            teams[ta][i] = b;
                            teams[tb][j] = a;
                            current = balance;
                            stats.swaps_accepted += 1;
                            improved = true;
                        }
                    }
                }
            }
        }

        trace!(
            event = "refinement_pass",
            pass = pass,
            cost = current,
            swaps = stats.swaps_accepted,
        );
        if !improved {
            break;
        }
    }

    stats.final_cost = current;
    debug!(
        event = "refinement_end",
        passes = stats.passes,
        swaps = stats.swaps_accepted,
        initial_cost = stats.initial_cost,
        final_cost = stats.final_cost,
    );
    stats
}

// Per-team running sums and counts of valid values for each field.
struct TeamState {
    values: Vec<Vec<Option<f64>>>,
    weights: Vec<f64>,
    sums: Vec<Vec<f64>>,
    counts: Vec<Vec<usize>>,
}

impl TeamState {
    fn new(entries: &[Entry], teams: &[Vec<usize>], fields: &[WeightedField]) -> Self {
        let total_weight: f64 = fields.iter().map(|f| f.weight).sum();
        let weights = fields
            .iter()
            .map(|f| {
                if total_weight > 0.0 {
                    f.weight / total_weight
                } else {
                    0.0
                }
            })
            .collect();
        let values: Vec<Vec<Option<f64>>> = entries
            .iter()
            .map(|e| {
                fields
                    .iter()
                    .map(|f| e.get(&f.field_id).as_number())
                    .collect()
            })
            .collect();

        let mut sums = vec![vec![0.0; fields.len()]; teams.len()];
        let mut counts = vec![vec![0; fields.len()]; teams.len()];
        for (t, members) in teams.iter().enumerate() {
            for &m in members {
                for (f, value) in values[m].iter().enumerate() {
                    if let Some(v) = value {
                        sums[t][f] += v;
                        counts[t][f] += 1;
                    }
                }
            }
        }

        Self {
            values,
            weights,
            sums,
            counts,
        }
    }

    fn cost(&self) -> f64 {
        self.cost_by(|t, f| (self.sums[t][f], self.counts[t][f]))
    }

    // Cost if `a` (in `ta`) and `b` (in `tb`) traded places.
    fn cost_with_swap(&self, ta: usize, a: usize, tb: usize, b: usize) -> f64 {
        self.cost_by(|t, f| {
            let (mut sum, mut count) = (self.sums[t][f], self.counts[t][f]);
            let (out, into) = if t == ta {
                (a, b)
            } else if t == tb {
                (b, a)
            } else {
                return (sum, count);
            };
            if let Some(v) = self.values[out][f] {
                sum -= v;
                count -= 1;
            }
            if let Some(v) = self.values[into][f] {
                sum += v;
                count += 1;
            }
            (sum, count)
        })
    }

    fn cost_by(&self, totals: impl Fn(usize, usize) -> (f64, usize)) -> f64 {
        let teams = self.sums.len();
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0.0)
            .map(|(f, w)| {
                let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
                for t in 0..teams {
                    let (sum, count) = totals(t, f);
                    let avg = if count > 0 { sum / count as f64 } else { 0.0 };
                    lo = lo.min(avg);
                    hi = hi.max(avg);
                }
                w * (hi - lo)
            })
            .sum()
    }

    fn apply_swap(&mut self, ta: usize, a: usize, tb: usize, b: usize) {
        for f in 0..self.weights.len() {
            if let Some(v) = self.values[a][f] {
                self.sums[ta][f] -= v;
                self.counts[ta][f] -= 1;
                self.sums[tb][f] += v;
                self.counts[tb][f] += 1;
            }
            if let Some(v) = self.values[b][f] {
                self.sums[tb][f] -= v;
                self.counts[tb][f] -= 1;
                self.sums[ta][f] += v;
                self.counts[ta][f] += 1;
            }
        }
    }
}

// Accumulated penalty each entry shares with each team.
struct Affinity {
    neighbors: Vec<Vec<(usize, f64)>>,
    by_team: Vec<Vec<f64>>,
}

impl Affinity {
    fn new(entries: &[Entry], teams: &[Vec<usize>], penalty: &PenaltyMatrix) -> Self {
        let index: HashMap<&str, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id(), i))
            .collect();
        let mut neighbors = vec![Vec::new(); entries.len()];
        for (a, b, p) in penalty.iter() {
            if let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) {
                neighbors[i].push((j, p));
                neighbors[j].push((i, p));
            }
        }
        // HashMap iteration order varies; keep float sums reproducible
        for list in &mut neighbors {
            list.sort_by_key(|&(j, _)| j);
        }

        let mut team_of = vec![0; entries.len()];
        for (t, members) in teams.iter().enumerate() {
            for &m in members {
                team_of[m] = t;
            }
        }
        let mut by_team = vec![vec![0.0; teams.len()]; entries.len()];
        for (i, list) in neighbors.iter().enumerate() {
            for &(j, p) in list {
                by_team[i][team_of[j]] += p;
            }
        }

        Self { neighbors, by_team }
    }

    fn pair(&self, a: usize, b: usize) -> f64 {
        self.neighbors[a]
            .iter()
            .find(|&&(j, _)| j == b)
            .map_or(0.0, |&(_, p)| p)
    }

    // Old shared penalty minus new shared penalty for the swap.
    fn swap_gain(&self, ta: usize, a: usize, tb: usize, b: usize) -> f64 {
        let old = self.by_team[a][ta] + self.by_team[b][tb];
        let shared = self.pair(a, b);
        let new = (self.by_team[a][tb] - shared) + (self.by_team[b][ta] - shared);
        old - new
    }

    fn apply_swap(&mut self, ta: usize, a: usize, tb: usize, b: usize) {
        for &(m, p) in &self.neighbors[a] {
            self.by_team[m][ta] -= p;
            self.by_team[m][tb] += p;
        }
        for &(m, p) in &self.neighbors[b] {
            self.by_team[m][tb] -= p;
            self.by_team[m][ta] += p;
        }
    }
}
