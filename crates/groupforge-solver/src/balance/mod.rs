//! Balanced team formation.
//!
//! Entries are ranked by a composite score and snake-drafted into teams,
//! optionally within categorical pools so every category is spread across
//! teams. A swap-based local search then narrows the gap between team
//! averages.

mod refine;
mod score;


use std::collections::BTreeMap;

use groupforge_config::BalanceConfig;
use groupforge_core::{Entry, GroupResult, PenaltyMatrix, WeightedField};
use tracing::debug;

use crate::draft::SnakeDraft;
use crate::split::group_key;

pub use refine::{refine_teams, RefinementStats};
pub use score::composite_scores;

/// A balanced team formation request.
#[derive(Debug, Clone)]
pub struct BalanceRequest<'a> {
    pub team_count: usize,
    pub balance_fields: Vec<WeightedField>,
    /// Categorical fields drafted as separate pools.
    pub partition_fields: Vec<String>,
    pub variety_penalty: Option<&'a PenaltyMatrix>,
    pub variety_weight: f64,
}

impl<'a> BalanceRequest<'a> {
    pub fn new(balance_fields: Vec<WeightedField>, team_count: usize) -> Self {
        Self {
            team_count,
            balance_fields,
            partition_fields: Vec::new(),
            variety_penalty: None,
            variety_weight: 0.0,
        }
    }

    pub fn with_partition_fields<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.partition_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Discourages repeating pairs from the history during refinement.
    pub fn with_variety(mut self, penalty: &'a PenaltyMatrix, weight: f64) -> Self {
        self.variety_penalty = Some(penalty);
        self.variety_weight = weight;
        self
    }
}

/// Forms `min(team_count, n)` balanced teams named `Team 1..k`.
///
/// # Example
///
/// ```
/// use groupforge_config::BalanceConfig;
/// use groupforge_core::{Entry, WeightedField};
/// use groupforge_solver::balance::{multi_balanced_teams, BalanceRequest};
///
/// let entries: Vec<Entry> = [10.0, 8.0, 6.0, 4.0]
///     .iter()
///     .enumerate()
///     .map(|(i, r)| Entry::new(format!("p{i}")).with("rating", *r))
///     .collect();
/// let request = BalanceRequest::new(vec![WeightedField::new("rating", 1.0)], 2);
///
/// let teams = multi_balanced_teams(&entries, &request, &BalanceConfig::default());
/// assert_eq!(teams[0].member_ids, vec!["p0", "p3"]);
/// assert_eq!(teams[1].member_ids, vec!["p1", "p2"]);
/// ```
pub fn multi_balanced_teams(
    entries: &[Entry],
    request: &BalanceRequest<'_>,
    config: &BalanceConfig,
) -> Vec<GroupResult> {
    let n = entries.len();
    let k = request.team_count.min(n);
    if k == 0 {
        return Vec::new();
    }

    let scores = composite_scores(entries, &request.balance_fields);
    let by_score_desc = |a: &usize, b: &usize| {
        scores[*b]
            .total_cmp(&scores[*a])
            .then_with(|| entries[*a].id().cmp(entries[*b].id()))
    };

    let mut teams: Vec<Vec<usize>> = vec![Vec::new(); k];
    let mut draft = SnakeDraft::new(k);
    if request.partition_fields.is_empty() {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(by_score_desc);
        for i in order {
            teams[draft.next_bucket()].push(i);
        }
    } else {
        let mut pools: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, entry) in entries.iter().enumerate() {
            pools
                .entry(group_key(entry, &request.partition_fields))
                .or_default()
                .push(i);
        }
        for pool in pools.values_mut() {
            pool.sort_by(by_score_desc);
            for &i in pool.iter() {
                teams[draft.next_bucket()].push(i);
            }
        }
        debug!(event = "pools_drafted", pools = pools.len());
    }
    debug!(event = "draft_complete", entries = n, teams = k);

    if n <= config.refinement_limit {
        let variety = request
            .variety_penalty
            .map(|penalty| (penalty, request.variety_weight));
        let partition_keys: Option<Vec<String>> = (!request.partition_fields.is_empty())
            .then(|| {
                entries
                    .iter()
                    .map(|entry| group_key(entry, &request.partition_fields))
                    .collect()
            });
        refine_teams(
            entries,
            &mut teams,
            &request.balance_fields,
            partition_keys.as_deref(),
            variety,
            config,
        );
    } else {
        debug!(
            event = "refinement_skipped",
            entries = n,
            limit = config.refinement_limit,
        );
    }

    teams
        .into_iter()
        .enumerate()
        .map(|(t, members)| {
            GroupResult::new(
                format!("Team {}", t + 1),
                members
                    .into_iter()
                    .map(|i| entries[i].id().to_string())
                    .collect(),
            )
        })
        .collect()
}
