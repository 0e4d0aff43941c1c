//! Assertions shared by grouping tests.

use std::collections::{BTreeSet, HashSet};

use groupforge_core::{Entry, GroupResult};

/// Asserts every entry appears in exactly one group and nothing else does.
pub fn assert_partition(groups: &[GroupResult], entries: &[Entry]) {
    let mut seen = HashSet::new();
    for group in groups {
        for id in &group.member_ids {
            assert!(seen.insert(id.as_str()), "entry {id} appears in more than one group");
        }
    }
    let expected: HashSet<&str> = entries.iter().map(Entry::id).collect();
    assert_eq!(seen, expected, "groups do not cover the input entries exactly");
}

/// Asserts the group count is `min(requested, entries)`.
pub fn assert_group_count(groups: &[GroupResult], requested: usize, entry_count: usize) {
    assert_eq!(groups.len(), requested.min(entry_count));
}

/// Member ids of each group as sorted sets.
pub fn member_sets(groups: &[GroupResult]) -> Vec<BTreeSet<String>> {
    groups
        .iter()
        .map(|g| g.member_ids.iter().cloned().collect())
        .collect()
}
