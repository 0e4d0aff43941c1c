//! One-call entry points that hide engine wiring.

use groupforge_config::EngineConfig;
use groupforge_core::{Criteria, Entry, GroupResult, PenaltyMatrix, Result};
use groupforge_solver::GroupingEngine;

/// Groups `entries` with the default engine configuration.
///
/// Use [`GroupingEngine::from_config_file`] to run from a config file.
pub fn group(
    entries: &[Entry],
    criteria: &Criteria,
    penalty: Option<&PenaltyMatrix>,
) -> Result<Vec<GroupResult>> {
    group_with_config(entries, criteria, penalty, EngineConfig::default())
}

/// Groups `entries` with an explicit engine configuration.
pub fn group_with_config(
    entries: &[Entry],
    criteria: &Criteria,
    penalty: Option<&PenaltyMatrix>,
    config: EngineConfig,
) -> Result<Vec<GroupResult>> {
    #[cfg(feature = "console")]
    crate::console::init();

    GroupingEngine::new(config).group(entries, criteria, penalty)
}
