//! Tests for quality metrics.

use super::*;
use groupforge_core::{BalancedCriteria, ClusterCriteria, Entry, Objective, WeightedField};
use groupforge_test::rated_entries;

fn group(name: &str, ids: &[&str]) -> GroupResult {
    GroupResult::new(name, ids.iter().map(|s| s.to_string()).collect())
}

fn rating_criteria() -> BalancedCriteria {
    BalancedCriteria::new(vec![WeightedField::new("rating", 1.0)], 2)
}

#[test]
fn test_equal_ratings_are_perfectly_balanced() {
    let entries = rated_entries(&[5.0, 5.0, 5.0, 5.0]);
    let groups = vec![group("Team 1", &["p0", "p1"]), group("Team 2", &["p2", "p3"])];

    let metrics = compute_balance_metrics(&groups, &entries, &rating_criteria());

    assert_eq!(metrics.balance_percent, 100);
    assert_eq!(metrics.per_field_gap["rating"], 0.0);
    assert_eq!(metrics.per_group[1].field_averages["rating"], 5.0);
}

#[test]
fn test_gap_normalized_by_global_range() {
    let entries = rated_entries(&[0.0, 2.0, 8.0, 10.0]);
    let groups = vec![group("Team 1", &["p0", "p1"]), group("Team 2", &["p2", "p3"])];

    let metrics = compute_balance_metrics(&groups, &entries, &rating_criteria());

    // averages 1 and 9, gap 8 over a range of 10
    assert_eq!(metrics.per_field_gap["rating"], 8.0);
    assert_eq!(metrics.balance_percent, 20);
}

#[test]
fn test_missing_values_do_not_count() {
    let entries = vec![
        Entry::new("a").with("rating", 4.0),
        Entry::new("b"),
        Entry::new("c").with("rating", 4.0),
        Entry::new("d").with("rating", "unrated"),
    ];
    let groups = vec![group("Team 1", &["a", "b"]), group("Team 2", &["c", "d"])];

    let metrics = compute_balance_metrics(&groups, &entries, &rating_criteria());

    assert_eq!(metrics.per_group[0].field_averages["rating"], 4.0);
    assert_eq!(metrics.per_group[1].field_averages["rating"], 4.0);
    assert_eq!(metrics.balance_percent, 100);
}

#[test]
fn test_group_without_values_averages_zero() {
    let entries = vec![Entry::new("a").with("rating", 6.0), Entry::new("b")];
    let groups = vec![group("Team 1", &["a"]), group("Team 2", &["b"])];

    let metrics = compute_balance_metrics(&groups, &entries, &rating_criteria());

    assert_eq!(metrics.per_group[1].field_averages["rating"], 0.0);
    assert_eq!(metrics.per_field_gap["rating"], 6.0);
    // degenerate global range falls back to 1, so the score clamps at 0
    assert_eq!(metrics.balance_percent, 0);
}

#[test]
fn test_single_group_is_fully_balanced() {
    let entries = rated_entries(&[1.0, 9.0]);
    let groups = vec![group("Team 1", &["p0", "p1"])];

    let metrics = compute_balance_metrics(&groups, &entries, &rating_criteria());
    assert_eq!(metrics.balance_percent, 100);
}

#[test]
fn test_identical_members_give_full_similarity_quality() {
    let entries = rated_entries(&[5.0, 5.0, 5.0, 5.0]);
    let groups = vec![group("Group 1", &["p0", "p1"]), group("Group 2", &["p2", "p3"])];
    let criteria = ClusterCriteria::new(vec![WeightedField::new("rating", 1.0)], 2);

    let metrics = compute_cluster_metrics(&groups, &entries, &criteria, Objective::Similarity);

    assert_eq!(metrics.quality_percent, 100);
    assert!(metrics.per_group.iter().all(|g| g.avg_intra_distance == 0.0));
}

#[test]
fn test_diversity_quality_is_average_distance() {
    let entries = rated_entries(&[0.0, 10.0, 0.0, 10.0]);
    let groups = vec![group("Group 1", &["p0", "p1"]), group("Group 2", &["p2", "p3"])];
    let criteria = ClusterCriteria::new(vec![WeightedField::new("rating", 1.0)], 2);

    let diverse = compute_cluster_metrics(&groups, &entries, &criteria, Objective::Diversity);
    let similar = compute_cluster_metrics(&groups, &entries, &criteria, Objective::Similarity);

    assert_eq!(diverse.quality_percent, 100);
    assert_eq!(similar.quality_percent, 0);
}

#[test]
fn test_cluster_quality_weights_by_pair_count() {
    // group 1: three identical members (3 pairs, distance 0)
    // group 2: two opposite members (1 pair, distance 1)
    let entries = rated_entries(&[0.0, 0.0, 0.0, 0.0, 10.0]);
    let groups = vec![
        group("Group 1", &["p0", "p1", "p2"]),
        group("Group 2", &["p3", "p4"]),
        group("Group 3", &[]),
    ];
    let criteria = ClusterCriteria::new(vec![WeightedField::new("rating", 1.0)], 3);

    let metrics = compute_cluster_metrics(&groups, &entries, &criteria, Objective::Similarity);

    assert_eq!(metrics.per_group[1].avg_intra_distance, 1.0);
    assert_eq!(metrics.per_group[2].avg_intra_distance, 0.0);
    assert_eq!(metrics.quality_percent, 75);
}

#[test]
fn test_compute_metrics_dispatch() {
    let entries = rated_entries(&[1.0, 2.0]);
    let groups = vec![group("Group 1", &["p0"]), group("Group 2", &["p1"])];

    assert!(compute_metrics(&groups, &entries, &Criteria::split(["rating"])).is_none());

    let balanced = Criteria::balanced(vec![WeightedField::new("rating", 1.0)], 2);
    assert!(matches!(
        compute_metrics(&groups, &entries, &balanced),
        Some(Metrics::Balance(_))
    ));

    let similar = Criteria::similarity(vec![WeightedField::new("rating", 1.0)], 2);
    let metrics = compute_metrics(&groups, &entries, &similar).unwrap();
    assert_eq!(metrics.percent(), 100);
}
