use super::*;

#[test]
fn defaults_match_stock_page() {
    let config = SiteConfig::default();
    assert_eq!(config.default_section, "home");
    assert_eq!(config.theme_storage_key, "theme");
    assert!((config.reveal_threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.notification_display_ms, 3000);
    assert_eq!(config.notification_exit_ms, 300);
    assert_eq!(config.repository_url, "#");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "default_section": "blog", "notification_display_ms": 5000 }"#)
        .expect("config should parse");
    assert_eq!(config.default_section, "blog");
    assert_eq!(config.notification_display_ms, 5000);
    assert_eq!(config.notification_exit_ms, 300);
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn empty_object_is_default() {
    let config = SiteConfig::from_json("{}").expect("config should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn unknown_fields_are_ignored() {
    let config = SiteConfig::from_json(r#"{ "analytics": true }"#).expect("config should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn threshold_is_clamped() {
    let high = SiteConfig::from_json(r#"{ "reveal_threshold": 4.0 }"#).expect("config should parse");
    assert!((high.reveal_threshold - 1.0).abs() < f64::EPSILON);
    let low = SiteConfig::from_json(r#"{ "reveal_threshold": -1 }"#).expect("config should parse");
    assert!(low.reveal_threshold.abs() < f64::EPSILON);
}

#[test]
fn negative_stagger_step_becomes_zero() {
    let config = SiteConfig::from_json(r#"{ "stagger_step_secs": -0.5 }"#).expect("config should parse");
    assert!(config.stagger_step_secs.abs() < f64::EPSILON);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = SiteConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = SiteConfig::from_json(r#"{ "notification_exit_ms": "slow" }"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_outside_browser_uses_defaults() {
    assert_eq!(SiteConfig::load(), SiteConfig::default());
}

#[test]
fn notification_timing_mirrors_config() {
    let config = SiteConfig::from_json(r#"{ "notification_display_ms": 10, "notification_exit_ms": 2 }"#)
        .expect("config should parse");
    let timing = config.notification_timing();
    assert_eq!(timing.display_ms, 10);
    assert_eq!(timing.exit_ms, 2);
}
