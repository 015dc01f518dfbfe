use aura_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AuraConfig::from_toml("").unwrap();

    // Cache defaults
    assert_eq!(config.cache.capacity, 10_000);
    assert_eq!(config.cache.ttl_high_secs, 900);
    assert_eq!(config.cache.ttl_elevated_secs, 600);
    assert_eq!(config.cache.ttl_moderate_secs, 360);
    assert_eq!(config.cache.ttl_floor_secs, 180);
    assert_eq!(config.cache.conf_high, 0.85);
    assert_eq!(config.cache.conf_elevated, 0.60);
    assert_eq!(config.cache.conf_moderate, 0.40);

    // Matcher defaults
    assert_eq!(config.matcher.weights.device, 25.0);
    assert_eq!(config.matcher.weights.age, 25.0);
    assert_eq!(config.matcher.weights.client_type, 20.0);
    assert_eq!(config.matcher.weights.region, 15.0);
    assert_eq!(config.matcher.weights.interest, 15.0);
    assert_eq!(config.matcher.tolerance_band, 5.0);
    assert_eq!(config.matcher.floor_score, 20.0);
    assert_eq!(config.matcher.session_ttl_secs, 86_400);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[cache]
capacity = 500
ttl_high_secs = 1200

[matcher]
tolerance_band = 10.0
"#;
    let config = AuraConfig::from_toml(toml).unwrap();
    assert_eq!(config.cache.capacity, 500);
    assert_eq!(config.cache.ttl_high_secs, 1200);
    // Non-overridden fields keep defaults
    assert_eq!(config.cache.ttl_floor_secs, 180);
    assert_eq!(config.matcher.tolerance_band, 10.0);
    assert_eq!(config.matcher.floor_score, 20.0);
}

#[test]
fn config_rejects_non_monotone_ttl_tiers() {
    let toml = r#"
[cache]
ttl_high_secs = 60
ttl_elevated_secs = 600
"#;
    assert!(AuraConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_negative_weights() {
    let toml = r#"
[matcher.weights]
device = -5.0
"#;
    assert!(AuraConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_garbage() {
    assert!(AuraConfig::from_toml("not toml [[").is_err());
}
