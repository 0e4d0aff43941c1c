//! Tests for the distance model.

use super::*;
use crate::domain::{Entry, FieldMeta, FieldType, FieldValue, Objective, PenaltyMatrix};

fn dist(a: impl Into<FieldValue>, b: impl Into<FieldValue>, meta: &FieldMeta, ranges: &DerivedRanges) -> f64 {
    field_distance(&a.into(), &b.into(), meta, ranges)
}

#[test]
fn test_select_is_case_insensitive() {
    let meta = FieldMeta::new("city", FieldType::Select, 1.0);
    let ranges = DerivedRanges::default();

    assert_eq!(dist("Paris", "PARIS", &meta, &ranges), 0.0);
    assert_eq!(dist("Paris", "Rome", &meta, &ranges), 1.0);
}

#[test]
fn test_missing_value_is_maximal() {
    let meta = FieldMeta::new("city", FieldType::Select, 1.0);
    let ranges = DerivedRanges::default();

    assert_eq!(dist(FieldValue::Unknown, "Rome", &meta, &ranges), 1.0);
    assert_eq!(dist("", "", &meta, &ranges), 1.0);
    assert_eq!(dist(FieldValue::Unknown, FieldValue::Unknown, &meta, &ranges), 1.0);
}

#[test]
fn test_checkbox() {
    let meta = FieldMeta::new("active", FieldType::Checkbox, 1.0);
    let ranges = DerivedRanges::default();

    assert_eq!(dist(true, true, &meta, &ranges), 0.0);
    assert_eq!(dist(true, false, &meta, &ranges), 1.0);
    assert_eq!(dist(true, "true", &meta, &ranges), 0.0);
}

#[test]
fn test_multiselect_jaccard() {
    let meta = FieldMeta::new("sports", FieldType::Multiselect, 1.0);
    let ranges = DerivedRanges::default();

    let d = dist(vec!["a", "b", "c"], vec!["b", "c", "d"], &meta, &ranges);
    assert!((d - 0.5).abs() < 1e-12);
    assert_eq!(dist(Vec::<&str>::new(), Vec::<&str>::new(), &meta, &ranges), 0.0);
    assert_eq!(dist(vec!["a"], vec!["b"], &meta, &ranges), 1.0);
}

#[test]
fn test_numeric_range_normalized() {
    let entries = vec![
        Entry::new("a").with("age", 20.0),
        Entry::new("b").with("age", 30.0),
        Entry::new("c").with("age", 60.0),
    ];
    let meta = FieldMeta::new("age", FieldType::Number, 1.0);
    let ranges = DerivedRanges::compute(&entries, std::slice::from_ref(&meta));

    assert_eq!(dist(20.0, 30.0, &meta, &ranges), 0.25);
    assert_eq!(dist(20.0, 60.0, &meta, &ranges), 1.0);
}

#[test]
fn test_degenerate_numeric_range_is_zero_distance() {
    let entries = vec![Entry::new("a").with("age", 5.0), Entry::new("b").with("age", 5.0)];
    let meta = FieldMeta::new("age", FieldType::RankedStat, 1.0);
    let ranges = DerivedRanges::compute(&entries, std::slice::from_ref(&meta));

    assert_eq!(ranges.numeric("age"), Some(&NumericRange::new(0.0, 0.0)));
    assert_eq!(dist(5.0, 5.0, &meta, &ranges), 0.0);
}

#[test]
fn test_observe_collapses_equal_values() {
    assert_eq!(NumericRange::observe([4.0, 4.0, 4.0]), NumericRange::default());
    assert_eq!(NumericRange::observe([4.0]), NumericRange::default());
    assert_eq!(NumericRange::observe([4.0, 1.0, 7.0]), NumericRange::new(1.0, 7.0));
}

#[test]
fn test_numeric_range_without_values() {
    let entries = vec![Entry::new("a"), Entry::new("b").with("age", "n/a")];
    let meta = FieldMeta::new("age", FieldType::Number, 1.0);
    let ranges = DerivedRanges::compute(&entries, std::slice::from_ref(&meta));

    assert_eq!(ranges.numeric("age"), Some(&NumericRange::new(0.0, 0.0)));
}

#[test]
fn test_ranked_category_uses_option_order() {
    let meta = FieldMeta::new("tier", FieldType::RankedCategory, 1.0)
        .with_options(["Bronze", "Silver", "Gold"]);
    let ranges = DerivedRanges::compute(&[], std::slice::from_ref(&meta));

    assert_eq!(dist("Bronze", "Gold", &meta, &ranges), 1.0);
    assert_eq!(dist("bronze", "Silver", &meta, &ranges), 0.5);
    assert_eq!(dist("Bronze", "Platinum", &meta, &ranges), 1.0);
}

#[test]
fn test_ranked_category_from_observed_values() {
    let entries = vec![
        Entry::new("a").with("level", "c"),
        Entry::new("b").with("level", "a"),
        Entry::new("c").with("level", "b"),
    ];
    let meta = FieldMeta::new("level", FieldType::RankedCategory, 1.0);
    let ranges = DerivedRanges::compute(&entries, std::slice::from_ref(&meta));

    let map = ranges.ordinal("level").unwrap();
    assert_eq!(map.rank("a"), Some(0));
    assert_eq!(map.rank("c"), Some(2));
    assert_eq!(dist("a", "b", &meta, &ranges), 0.5);
}

#[test]
fn test_ranked_category_single_category() {
    let meta = FieldMeta::new("tier", FieldType::RankedCategory, 1.0).with_options(["Only"]);
    let ranges = DerivedRanges::compute(&[], std::slice::from_ref(&meta));

    assert_eq!(dist("Only", "only", &meta, &ranges), 0.0);
}

#[test]
fn test_gower_weighted_mean() {
    let entries = vec![
        Entry::new("a").with("score", 0.0).with("team", "red"),
        Entry::new("b").with("score", 10.0).with("team", "red"),
    ];
    let fields = vec![
        FieldMeta::new("score", FieldType::Number, 0.75),
        FieldMeta::new("team", FieldType::Select, 0.25),
        FieldMeta::new("ignored", FieldType::Select, 0.0),
    ];
    let ranges = DerivedRanges::compute(&entries, &fields);

    let d = gower_distance(&entries[0], &entries[1], &fields, &ranges);
    assert!((d - 0.75).abs() < 1e-12);
}

#[test]
fn test_gower_zero_weight() {
    let a = Entry::new("a").with("x", "1");
    let b = Entry::new("b").with("x", "2");
    let fields = vec![FieldMeta::new("x", FieldType::Select, 0.0)];

    assert_eq!(gower_distance(&a, &b, &fields, &DerivedRanges::default()), 0.0);
}

#[test]
fn test_matrix_variety_adjustment() {
    let entries = vec![
        Entry::new("a").with("score", 0.0),
        Entry::new("b").with("score", 5.0),
        Entry::new("c").with("score", 10.0),
    ];
    let fields = vec![FieldMeta::new("score", FieldType::Number, 1.0)];
    let base = build_distance_matrix(&entries, &fields);

    let mut penalties = PenaltyMatrix::new();
    penalties.set("a", "b", 2.0);
    penalties.set("a", "zz", 9.0);

    let mut similar = base.clone();
    assert_eq!(similar.apply_variety(&entries, &penalties, 0.5, Objective::Similarity), 1);
    assert_eq!(similar.get(0, 1), 1.5);
    assert_eq!(similar.get(1, 0), 1.5);
    assert_eq!(similar.get(1, 2), 0.5);

    let mut diverse = base.clone();
    diverse.apply_variety(&entries, &penalties, 0.5, Objective::Diversity);
    assert_eq!(diverse.get(0, 1), 0.0);

    let mut untouched = base.clone();
    assert_eq!(untouched.apply_variety(&entries, &PenaltyMatrix::new(), 1.0, Objective::Similarity), 0);
    assert_eq!(untouched, base);
}
