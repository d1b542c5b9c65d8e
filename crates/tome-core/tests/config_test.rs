use tome_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TomeConfig::from_toml("").unwrap();

    // Recommend defaults
    assert_eq!(config.recommend.max_results, 5);
    assert_eq!(config.recommend.neighbor_count, 5);
    assert_eq!(config.recommend.item_candidates_per_owned, 5);
    assert_eq!(
        config.recommend.association_source,
        AssociationSource::FrequentPatterns
    );

    // Mining defaults
    assert_eq!(config.mining.min_support, 1);
    assert_eq!(
        config.mining.cooccurrence_policy,
        CooccurrencePolicy::Incremental
    );

    // Catalog defaults
    assert_eq!(config.catalog.profile_id_floor, 1);
    assert_eq!(config.catalog.item_id_floor, 0);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[recommend]
neighbor_count = 10
association_source = "cooccurrence"

[mining]
cooccurrence_policy = "full_rebuild"
"#;
    let config = TomeConfig::from_toml(toml).unwrap();
    assert_eq!(config.recommend.neighbor_count, 10);
    assert_eq!(
        config.recommend.association_source,
        AssociationSource::Cooccurrence
    );
    assert_eq!(
        config.mining.cooccurrence_policy,
        CooccurrencePolicy::FullRebuild
    );
    // Non-overridden fields keep defaults
    assert_eq!(config.recommend.max_results, 5);
    assert_eq!(config.mining.min_support, 1);
}

#[test]
fn result_cap_is_clamped_to_five() {
    let config = TomeConfig::from_toml("[recommend]\nmax_results = 50\n").unwrap();
    assert_eq!(config.recommend.max_results, 50);
    assert_eq!(config.recommend.result_cap(), 5);

    let config = TomeConfig::from_toml("[recommend]\nmax_results = 3\n").unwrap();
    assert_eq!(config.recommend.result_cap(), 3);
}

#[test]
fn zero_min_support_is_rejected() {
    let err = TomeConfig::from_toml("[mining]\nmin_support = 0\n").unwrap_err();
    assert!(err.to_string().contains("min_support"));
}

#[test]
fn zero_max_results_is_rejected() {
    let err = TomeConfig::from_toml("[recommend]\nmax_results = 0\n").unwrap_err();
    assert!(err.to_string().contains("max_results"));

    let mut config = TomeConfig::default();
    config.recommend.max_results = 0;
    assert!(config.validate().is_err());
}

#[test]
fn zero_neighbor_count_is_rejected() {
    assert!(TomeConfig::from_toml("[recommend]\nneighbor_count = 0\n").is_err());
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = TomeConfig::from_toml("[recommend\nmax_results = ").unwrap_err();
    assert!(matches!(err, tome_core::TomeError::ConfigError(_)));
}

#[test]
fn config_serde_roundtrip() {
    let config = TomeConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TomeConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.recommend.max_results, config.recommend.max_results);
    assert_eq!(roundtripped.mining.min_support, config.mining.min_support);
}
