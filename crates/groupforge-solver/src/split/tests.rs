//! Tests for exact-match partitioning.

use super::*;
use groupforge_test::assert_partition;

#[test]
fn test_split_sorted_by_key() {
    let entries = vec![
        Entry::new("u1").with("gender", "Male"),
        Entry::new("u2").with("gender", "Female"),
        Entry::new("u3").with("gender", "Male"),
    ];

    let groups = split_by_attributes(&entries, &["gender"]);

    assert_eq!(
        groups,
        vec![
            GroupResult::new("Female", vec!["u2".into()]),
            GroupResult::new("Male", vec!["u1".into(), "u3".into()]),
        ]
    );
}

#[test]
fn test_missing_and_empty_values_are_unknown() {
    let entries = vec![
        Entry::new("u1").with("gender", "Male"),
        Entry::new("u2"),
        Entry::new("u3").with("gender", ""),
    ];

    let groups = split_by_attributes(&entries, &["gender"]);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].group_name, "Unknown");
    assert_eq!(groups[1].member_ids, vec!["u2".to_string(), "u3".to_string()]);
}

#[test]
fn test_two_field_cross_product() {
    let entries = vec![
        Entry::new("a").with("gender", "F").with("level", "B"),
        Entry::new("b").with("gender", "F").with("level", "A"),
        Entry::new("c").with("gender", "M").with("level", "A"),
        Entry::new("d").with("gender", "F").with("level", "A"),
        Entry::new("e").with("gender", "M"),
    ];

    let groups = split_by_attributes(&entries, &["gender", "level"]);
    let names: Vec<&str> = groups.iter().map(|g| g.group_name.as_str()).collect();

    assert_eq!(names, vec!["F + A", "F + B", "M + A", "M + Unknown"]);
    assert_eq!(groups[0].member_ids, vec!["b".to_string(), "d".to_string()]);
    assert_partition(&groups, &entries);
}

#[test]
fn test_non_string_values_are_coerced() {
    let entries = vec![
        Entry::new("a").with("captain", true),
        Entry::new("b").with("captain", false),
        Entry::new("c").with("year", 2024),
    ];

    let by_captain = split_by_attributes(&entries, &["captain"]);
    let names: Vec<&str> = by_captain.iter().map(|g| g.group_name.as_str()).collect();
    assert_eq!(names, vec!["Unknown", "false", "true"]);

    let by_year = split_by_attributes(&entries, &["year"]);
    assert_eq!(by_year[0].group_name, "2024");
}

#[test]
fn test_empty_inputs() {
    let entries = vec![Entry::new("a").with("x", "1")];
    assert!(split_by_attributes(&[], &["x"]).is_empty());
    assert!(split_by_attributes::<&str>(&entries, &[]).is_empty());
}
