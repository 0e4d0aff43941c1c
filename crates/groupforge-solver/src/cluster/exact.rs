//! Exact clustering over a full distance matrix.
//!
//! Farthest-first seeding followed by greedy nearest-first assignment.

use groupforge_core::{DistanceMatrix, Objective};

/// Chosen seeds and every entry's distance to its nearest seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Seeding {
    /// Seed indices in creation order; the first is always entry 0.
    pub seeds: Vec<usize>,
    pub min_distance: Vec<f64>,
}

/// Picks `k` seeds that are maximally spread apart.
///
/// Seed 0 is entry 0. Each further seed is the non-seed entry whose
/// distance to its nearest seed is largest; ties go to the lowest index.
pub fn farthest_first_seeds(matrix: &DistanceMatrix, k: usize) -> Seeding {
    let n = matrix.len();
    if n == 0 || k == 0 {
        return Seeding {
            seeds: Vec::new(),
            min_distance: vec![0.0; n],
        };
    }

    let mut is_seed = vec![false; n];
    is_seed[0] = true;
    let mut seeds = vec![0];
    let mut min_distance: Vec<f64> = (0..n).map(|i| matrix.get(0, i)).collect();

    while seeds.len() < k.min(n) {
        let mut best: Option<(usize, f64)> = None;
        for i in (0..n).filter(|&i| !is_seed[i]) {
            if best.map_or(true, |(_, d)| min_distance[i] > d) {
                best = Some((i, min_distance[i]));
            }
        }
        let Some((next, _)) = best else {
            break;
        };

        is_seed[next] = true;
        seeds.push(next);
        for (i, slot) in min_distance.iter_mut().enumerate() {
            *slot = slot.min(matrix.get(next, i));
        }
    }

    Seeding {
        seeds,
        min_distance,
    }
}

/// Assigns every non-seed entry to a seeded group.
///
/// Entries are visited nearest-first (ascending distance to the nearest
/// seed, ties by index). Each goes to the group whose current average
/// distance to it is smallest (similarity) or largest (diversity); ties go
/// to the lowest group. Groups grow as entries are placed.
pub fn greedy_assign(
    matrix: &DistanceMatrix,
    seeding: &Seeding,
    objective: Objective,
) -> Vec<Vec<usize>> {
    let n = matrix.len();
    let mut groups: Vec<Vec<usize>> = seeding.seeds.iter().map(|&s| vec![s]).collect();
    if groups.is_empty() {
        return groups;
    }

    let mut is_seed = vec![false; n];
    for &s in &seeding.seeds {
        is_seed[s] = true;
    }
    let mut order: Vec<usize> = (0..n).filter(|&i| !is_seed[i]).collect();
    order.sort_by(|&a, &b| {
        seeding.min_distance[a]
            .total_cmp(&seeding.min_distance[b])
            .then(a.cmp(&b))
    });

    for entry in order {
        let mut chosen = 0;
        let mut chosen_avg = average_distance(matrix, entry, &groups[0]);
        for (g, members) in groups.iter().enumerate().skip(1) {
            let avg = average_distance(matrix, entry, members);
            let better = match objective {
                Objective::Similarity => avg < chosen_avg,
                Objective::Diversity => avg > chosen_avg,
            };
            if better {
                chosen = g;
                chosen_avg = avg;
            }
        }
        groups[chosen].push(entry);
    }

    groups
}

fn average_distance(matrix: &DistanceMatrix, entry: usize, members: &[usize]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    members.iter().map(|&m| matrix.get(entry, m)).sum::<f64>() / members.len() as f64
}
