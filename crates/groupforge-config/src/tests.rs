//! Tests for engine configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.clustering.exact_limit, 1200);
    assert_eq!(config.balance.refinement_limit, 2000);
    assert_eq!(config.balance.max_passes, 100);
    assert_eq!(config.balance.improvement_epsilon, 1e-9);
    assert_eq!(config.balance.variety_swap_scale, 0.1);
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [clustering]
        exact_limit = 500

        [balance]
        refinement_limit = 300
        improvement_epsilon = 1e-6
        variety_swap_scale = 0.25
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.clustering.exact_limit, 500);
    assert_eq!(config.balance.refinement_limit, 300);
    assert_eq!(config.balance.max_passes, 100);
    assert_eq!(config.balance.improvement_epsilon, 1e-6);
    assert_eq!(config.balance.variety_swap_scale, 0.25);
}

#[test]
fn test_empty_toml_is_default() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        clustering:
          exact_limit: 64
        balance:
          max_passes: 7
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.clustering.exact_limit, 64);
    assert_eq!(config.balance.max_passes, 7);
    assert_eq!(config.balance.refinement_limit, 2000);
}

#[test]
fn test_invalid_values_rejected() {
    let zero_passes = EngineConfig::from_toml_str("[balance]\nmax_passes = 0\n");
    assert!(matches!(zero_passes, Err(ConfigError::Invalid(_))));

    let negative_scale = EngineConfig::new().with_variety_swap_scale(-1.0);
    assert!(negative_scale.validate().is_err());
}

#[test]
fn test_missing_file() {
    let result = EngineConfig::load("/nonexistent/groupforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_exact_clustering_limit(10)
        .with_refinement_limit(20)
        .with_max_passes(3)
        .with_variety_swap_scale(0.5);

    assert_eq!(config.clustering.exact_limit, 10);
    assert_eq!(config.balance.refinement_limit, 20);
    assert_eq!(config.balance.max_passes, 3);
    assert!(config.validate().is_ok());
}
