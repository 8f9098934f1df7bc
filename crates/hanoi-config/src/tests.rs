//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        move_display_limit = 10
        verify_results = false

        [disks]
        min = 4
        max = 8
    "#;

    let config = HanoiConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.disks, DiskRange { min: 4, max: 8 });
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.move_display_limit(), 10);
    assert!(!config.verify_results);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        disks:
          min: 5
          max: 6
    "#;

    let config = HanoiConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.disks.max, 6);
    assert!(config.verify_results);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = HanoiConfig::from_toml_str("").unwrap();
    assert_eq!(config, HanoiConfig::default());
    assert_eq!(config.disks, DiskRange::default());
    assert_eq!(config.move_display_limit(), DEFAULT_MOVE_DISPLAY_LIMIT);
}

#[test]
fn test_invalid_range_rejected() {
    let toml = r#"
        [disks]
        min = 9
        max = 3
    "#;

    let err = HanoiConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file() {
    let err = HanoiConfig::load("/nonexistent/hanoi.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(
        HanoiConfig::load("/nonexistent/hanoi.toml").unwrap_or_default(),
        HanoiConfig::default()
    );
}

#[test]
fn test_builder() {
    let config = HanoiConfig::new()
        .with_random_seed(123)
        .with_move_display_limit(5)
        .with_verify_results(false)
        .with_disk_range(DiskRange::new(3, 4).unwrap());

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.move_display_limit(), 5);
    assert!(!config.verify_results);
    assert_eq!(config.disks.min, 3);
}

#[test]
fn test_config_error_converts() {
    let err: HanoiError = ConfigError::Invalid("bad".to_string()).into();
    assert_eq!(err, HanoiError::Config("Invalid configuration: bad".to_string()));
}
