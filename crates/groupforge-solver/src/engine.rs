//! Criteria-driven entry point over the grouping algorithms.

use std::path::Path;
use std::time::Instant;

use groupforge_config::EngineConfig;
use groupforge_core::{
    resolve_field_meta, ClusterCriteria, Criteria, Entry, GroupForgeError, GroupResult, Objective,
    PenaltyMatrix, Result,
};
use groupforge_scoring::{compute_metrics, Metrics};
use tracing::info;

use crate::balance::{multi_balanced_teams, BalanceRequest};
use crate::cluster::{cluster_by_distance, ClusterRequest};
use crate::split::split_by_attributes;

/// Runs groupings and scores them with a shared configuration.
///
/// Invocations are independent; one engine can serve any number of
/// callers.
///
/// # Example
///
/// ```
/// use groupforge_core::{Criteria, Entry, WeightedField};
/// use groupforge_solver::GroupingEngine;
///
/// let entries: Vec<Entry> = [9.0, 7.0, 4.0, 2.0]
///     .iter()
///     .enumerate()
///     .map(|(i, r)| Entry::new(format!("p{i}")).with("rating", *r))
///     .collect();
/// let criteria = Criteria::balanced(vec![WeightedField::new("rating", 1.0)], 2);
///
/// let engine = GroupingEngine::default();
/// let teams = engine.group(&entries, &criteria, None).unwrap();
/// let metrics = engine.evaluate(&teams, &entries, &criteria).unwrap();
///
/// assert_eq!(teams.len(), 2);
/// assert_eq!(metrics.percent(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    config: EngineConfig,
}

impl GroupingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates an engine from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GroupForgeError::Config`] if the file cannot be read, parsed
    /// or validated.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = EngineConfig::load(path)
            .map_err(|e| GroupForgeError::Config(e.to_string()))?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates `criteria` and partitions `entries` accordingly.
    ///
    /// `penalty` is only consulted when the criteria carry a positive
    /// variety weight.
    ///
    /// # Errors
    ///
    /// Returns [`GroupForgeError::InvalidCriteria`] when the criteria are
    /// structurally malformed.
    pub fn group(
        &self,
        entries: &[Entry],
        criteria: &Criteria,
        penalty: Option<&PenaltyMatrix>,
    ) -> Result<Vec<GroupResult>> {
        criteria.validate()?;

        let start = Instant::now();
        let kind = criteria_kind(criteria);
        info!(event = "grouping_start", kind = kind, entries = entries.len());

        let groups = match criteria {
            Criteria::Split { field_ids } => split_by_attributes(entries, field_ids.as_slice()),
            Criteria::Similarity(c) => self.cluster(entries, c, Objective::Similarity, penalty),
            Criteria::Diversity(c) => self.cluster(entries, c, Objective::Diversity, penalty),
            Criteria::Balanced(c) => {
                let mut request = BalanceRequest::new(c.balance_fields.clone(), c.team_count)
                    .with_partition_fields(c.partition_fields.iter().cloned());
                if let (Some(penalty), Some(weight)) = (penalty, c.variety_weight) {
                    request = request.with_variety(penalty, weight);
                }
                multi_balanced_teams(entries, &request, &self.config.balance)
            }
        };

        info!(
            event = "grouping_end",
            kind = kind,
            entries = entries.len(),
            groups = groups.len(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(groups)
    }

    fn cluster(
        &self,
        entries: &[Entry],
        criteria: &ClusterCriteria,
        objective: Objective,
        penalty: Option<&PenaltyMatrix>,
    ) -> Vec<GroupResult> {
        let fields = resolve_field_meta(&criteria.fields, entries);
        let mut request = ClusterRequest::new(fields, criteria.group_count, objective);
        if let (Some(penalty), Some(weight)) = (penalty, criteria.variety_weight) {
            request = request.with_variety(penalty, weight);
        }
        cluster_by_distance(entries, &request, &self.config.clustering)
    }

    /// Scores a grouping against the criteria that produced it.
    ///
    /// Returns `None` for exact-match splits.
    pub fn evaluate(
        &self,
        groups: &[GroupResult],
        entries: &[Entry],
        criteria: &Criteria,
    ) -> Option<Metrics> {
        compute_metrics(groups, entries, criteria)
    }
}

fn criteria_kind(criteria: &Criteria) -> &'static str {
    match criteria {
        Criteria::Split { .. } => "split",
        Criteria::Similarity(_) => "similarity",
        Criteria::Diversity(_) => "diversity",
        Criteria::Balanced(_) => "balanced",
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
