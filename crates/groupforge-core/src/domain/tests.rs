//! Tests for domain types.

use super::*;

#[test]
fn test_key_string_coercion() {
    assert_eq!(FieldValue::from(true).key_string().as_deref(), Some("true"));
    assert_eq!(FieldValue::from(3.0).key_string().as_deref(), Some("3"));
    assert_eq!(FieldValue::from(2.5).key_string().as_deref(), Some("2.5"));
    assert_eq!(FieldValue::from(vec!["a", "b"]).key_string().as_deref(), Some("a,b"));
    assert_eq!(FieldValue::from("").key_string(), None);
    assert_eq!(FieldValue::from(f64::NAN).key_string(), None);
    assert_eq!(FieldValue::from(Option::<&str>::None), FieldValue::Unknown);
}

#[test]
fn test_entry_missing_field_is_unknown() {
    let entry = Entry::new("u1").with("gender", "Male");
    assert_eq!(entry.get("gender"), &FieldValue::from("Male"));
    assert!(entry.get("age").is_unknown());
}

#[test]
fn test_infer_field_meta() {
    let entries = vec![
        Entry::new("a").with("tags", FieldValue::Unknown),
        Entry::new("b")
            .with("tags", vec!["x"])
            .with("flag", false)
            .with("score", 4)
            .with("city", "Oslo"),
    ];
    let fields: Vec<WeightedField> = ["tags", "flag", "score", "city", "nothing"]
        .iter()
        .map(|f| WeightedField::new(*f, 1.0))
        .collect();

    let types: Vec<FieldType> = infer_field_meta(&fields, &entries)
        .into_iter()
        .map(|m| m.field_type)
        .collect();
    assert_eq!(
        types,
        vec![
            FieldType::Multiselect,
            FieldType::Checkbox,
            FieldType::Number,
            FieldType::Select,
            FieldType::Text,
        ]
    );
}

#[test]
fn test_resolve_keeps_declared_type() {
    let entries = vec![Entry::new("a").with("tier", "Gold")];
    let fields = vec![
        WeightedField::new("tier", 1.0)
            .with_type(FieldType::RankedCategory)
            .with_options(["Silver", "Gold"]),
    ];
    let metas = resolve_field_meta(&fields, &entries);

    assert_eq!(metas[0].field_type, FieldType::RankedCategory);
    assert_eq!(metas[0].options.as_ref().map(Vec::len), Some(2));
}

#[test]
fn test_criteria_validation() {
    assert!(Criteria::split(["a", "b"]).validate().is_ok());
    assert!(Criteria::split(["a", "b", "c"]).validate().is_err());
    assert!(Criteria::split(Vec::<String>::new()).validate().is_err());
    assert!(Criteria::balanced(vec![WeightedField::new("r", 1.0)], 0)
        .validate()
        .is_err());
    assert!(Criteria::similarity(vec![WeightedField::new("r", -1.0)], 2)
        .validate()
        .is_err());

    let with_variety = Criteria::Diversity(
        ClusterCriteria::new(vec![WeightedField::new("r", 1.0)], 3).with_variety_weight(0.5),
    );
    assert!(with_variety.validate().is_ok());
    assert_eq!(with_variety.objective(), Some(Objective::Diversity));
}

#[test]
fn test_penalty_matrix_is_symmetric() {
    let mut penalties = PenaltyMatrix::new();
    penalties.set("b", "a", 2.0);
    penalties.set("a", "a", 5.0);

    assert_eq!(penalties.get("a", "b"), 2.0);
    assert_eq!(penalties.get("a", "a"), 0.0);
    assert_eq!(penalties.len(), 1);

    penalties.set("a", "b", 0.0);
    assert!(penalties.is_empty());
}

#[test]
fn test_penalty_record_groups() {
    let groups = vec![
        GroupResult::new("Team 1", vec!["a".into(), "b".into(), "c".into()]),
        GroupResult::new("Team 2", vec!["d".into()]),
    ];
    let mut penalties = PenaltyMatrix::new();
    penalties.record_groups(&groups);
    penalties.record_groups(&groups[..1]);

    assert_eq!(penalties.get("a", "c"), 2.0);
    assert_eq!(penalties.get("c", "b"), 2.0);
    assert_eq!(penalties.get("a", "d"), 0.0);
    assert_eq!(penalties.len(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn test_entry_json_roundtrip_values() {
    let entry: Entry = serde_json::from_str(
        r#"{"id":"u1","data":{"age":31,"tags":["a"],"active":true,"city":"Oslo","note":null}}"#,
    )
    .unwrap();

    assert_eq!(entry.get("age").as_number(), Some(31.0));
    assert_eq!(entry.get("tags"), &FieldValue::from(vec!["a"]));
    assert_eq!(entry.get("active").as_bool(), Some(true));
    assert!(entry.get("note").is_unknown());
}
