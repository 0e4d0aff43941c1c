//! Property tests for the partition law, group-count bound and determinism.

use std::collections::BTreeSet;

use groupforge::prelude::*;
use groupforge_test::{assert_group_count, assert_partition};
use proptest::prelude::*;

const POSITIONS: [&str; 3] = ["Guard", "Forward", "Center"];

fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        (
            prop::option::of(0.0f64..100.0),
            prop::option::of(0usize..POSITIONS.len()),
            any::<bool>(),
        ),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (rating, position, captain))| {
                Entry::new(format!("e{i:03}"))
                    .with("rating", rating)
                    .with("position", position.map(|p| POSITIONS[p]))
                    .with("captain", captain)
            })
            .collect()
    })
}

fn fields() -> Vec<WeightedField> {
    vec![
        WeightedField::new("rating", 1.0),
        WeightedField::new("position", 0.5),
        WeightedField::new("captain", 0.25),
    ]
}

fn criteria_for(kind: usize, count: usize) -> Criteria {
    match kind {
        0 => Criteria::similarity(fields(), count),
        1 => Criteria::diversity(fields(), count),
        _ => Criteria::balanced(vec![WeightedField::new("rating", 1.0)], count),
    }
}

proptest! {
    #[test]
    fn groups_partition_entries(
        entries in entries_strategy(40),
        kind in 0usize..3,
        count in 1usize..8,
        exact_limit in prop::sample::select(vec![0usize, 1200]),
    ) {
        let config = EngineConfig::new().with_exact_clustering_limit(exact_limit);
        let groups = group_with_config(&entries, &criteria_for(kind, count), None, config).unwrap();

        assert_partition(&groups, &entries);
        assert_group_count(&groups, count, entries.len());
        prop_assert!(groups.iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn grouping_is_deterministic(
        entries in entries_strategy(30),
        kind in 0usize..3,
        count in 1usize..6,
        pairs in prop::collection::vec((0usize..30, 0usize..30, 0.5f64..3.0), 0..10),
    ) {
        let mut history = PenaltyMatrix::new();
        for (a, b, p) in pairs {
            history.set(&format!("e{a:03}"), &format!("e{b:03}"), p);
        }
        let criteria = match criteria_for(kind, count) {
            Criteria::Similarity(c) => Criteria::Similarity(c.with_variety_weight(0.7)),
            Criteria::Diversity(c) => Criteria::Diversity(c.with_variety_weight(0.7)),
            Criteria::Balanced(c) => Criteria::Balanced(c.with_variety_weight(0.7)),
            other => other,
        };
        let engine = GroupingEngine::default();

        let first = engine.group(&entries, &criteria, Some(&history)).unwrap();
        let second = engine.group(&entries, &criteria, Some(&history)).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn split_keys_are_sorted_and_distinct(entries in entries_strategy(40)) {
        let groups = group_with_config(
            &entries,
            &Criteria::split(["position", "captain"]),
            None,
            EngineConfig::default(),
        )
        .unwrap();

        assert_partition(&groups, &entries);
        let names: Vec<&str> = groups.iter().map(|g| g.group_name.as_str()).collect();
        let sorted: BTreeSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(names, sorted.into_iter().collect::<Vec<_>>());
    }
}
